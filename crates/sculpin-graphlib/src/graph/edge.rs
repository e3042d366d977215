//! Edge types.
//!
//! An edge joins two endpoint labels `v` and `w`. Directed edges go from `v` to `w`; for
//! undirected edges the endpoint order carries no meaning, so `{v, w}` and `{w, v}` are the
//! same edge. The optional weight is payload, not identity.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::Label;

#[derive(Clone)]
pub struct Edge<L> {
    v: L,
    w: L,
    directed: bool,
    weight: Option<f64>,
}

impl<L: Label> Edge<L> {
    pub fn new(v: L, w: L, directed: bool) -> Self {
        Self {
            v,
            w,
            directed,
            weight: None,
        }
    }

    pub fn directed(v: L, w: L) -> Self {
        Self::new(v, w, true)
    }

    pub fn undirected(v: L, w: L) -> Self {
        Self::new(v, w, false)
    }

    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn v(&self) -> &L {
        &self.v
    }

    pub fn w(&self) -> &L {
        &self.w
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn has_weight(&self) -> bool {
        self.weight.is_some()
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// The endpoint opposite to `end`, or `None` if `end` is not an endpoint.
    ///
    /// Self-loops return `end` itself.
    pub fn opposite(&self, end: &L) -> Option<&L> {
        if &self.v == end {
            Some(&self.w)
        } else if &self.w == end {
            Some(&self.v)
        } else {
            None
        }
    }

    /// The same edge with its endpoints swapped (weight and orientation kept).
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            v: self.w.clone(),
            w: self.v.clone(),
            directed: self.directed,
            weight: self.weight,
        }
    }

    fn ordered_ends(&self) -> (&L, &L) {
        if self.directed || self.v <= self.w {
            (&self.v, &self.w)
        } else {
            (&self.w, &self.v)
        }
    }
}

impl<L: Label> PartialEq for Edge<L> {
    fn eq(&self, other: &Self) -> bool {
        self.directed == other.directed && self.ordered_ends() == other.ordered_ends()
    }
}

impl<L: Label> Eq for Edge<L> {}

impl<L: Label> Hash for Edge<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.directed.hash(state);
        let (v, w) = self.ordered_ends();
        v.hash(state);
        w.hash(state);
    }
}

impl<L: Label> fmt::Debug for Edge<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "--" };
        write!(f, "{:?} {arrow} {:?}", self.v, self.w)?;
        if let Some(weight) = self.weight {
            write!(f, " ({weight})")?;
        }
        Ok(())
    }
}
