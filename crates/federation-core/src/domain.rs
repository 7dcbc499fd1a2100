//! Closed enumerated domains
//!
//! Kind fields (participation, reaction, relationship) only admit a fixed set of
//! values. The entity stores the raw string so any value can be supplied at
//! construction; validation is what rejects values outside the domain.

use std::fmt;
use std::marker::PhantomData;

/// A closed set of string-named values
pub trait ClosedDomain: Copy + Sized + 'static {
    /// Every member, in declaration order
    const ALL: &'static [Self];
    /// Wire names of every member
    const NAMES: &'static [&'static str];

    fn as_str(self) -> &'static str;

    fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }
}

/// Participation kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Participation {
    Reaction,
    Subscription,
    Comment,
}

impl ClosedDomain for Participation {
    const ALL: &'static [Self] = &[
        Participation::Reaction,
        Participation::Subscription,
        Participation::Comment,
    ];
    const NAMES: &'static [&'static str] = &["reaction", "subscription", "comment"];

    fn as_str(self) -> &'static str {
        match self {
            Participation::Reaction => "reaction",
            Participation::Subscription => "subscription",
            Participation::Comment => "comment",
        }
    }
}

/// Reaction kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReactionKind {
    Like,
}

impl ClosedDomain for ReactionKind {
    const ALL: &'static [Self] = &[ReactionKind::Like];
    const NAMES: &'static [&'static str] = &["like"];

    fn as_str(self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
        }
    }
}

/// Relationship kind between two handles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    Sharing,
    Following,
    Ignoring,
    Blocking,
}

impl ClosedDomain for RelationshipKind {
    const ALL: &'static [Self] = &[
        RelationshipKind::Sharing,
        RelationshipKind::Following,
        RelationshipKind::Ignoring,
        RelationshipKind::Blocking,
    ];
    const NAMES: &'static [&'static str] = &["sharing", "following", "ignoring", "blocking"];

    fn as_str(self) -> &'static str {
        match self {
            RelationshipKind::Sharing => "sharing",
            RelationshipKind::Following => "following",
            RelationshipKind::Ignoring => "ignoring",
            RelationshipKind::Blocking => "blocking",
        }
    }
}

/// Raw value of a kind field, possibly outside its domain
pub struct DomainValue<T: ClosedDomain> {
    raw: String,
    _domain: PhantomData<T>,
}

impl<T: ClosedDomain> DomainValue<T> {
    /// An unset value
    pub fn empty() -> Self {
        DomainValue::raw("")
    }

    /// Accept any string; membership is checked at validation time
    pub fn raw(value: impl Into<String>) -> Self {
        DomainValue {
            raw: value.into(),
            _domain: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The domain member, if the raw value names one
    pub fn get(&self) -> Option<T> {
        T::parse(&self.raw)
    }

    pub fn is_member(&self) -> bool {
        self.get().is_some()
    }
}

impl<T: ClosedDomain> From<T> for DomainValue<T> {
    fn from(value: T) -> Self {
        DomainValue::raw(value.as_str())
    }
}

impl<T: ClosedDomain> Default for DomainValue<T> {
    fn default() -> Self {
        DomainValue::empty()
    }
}

impl<T: ClosedDomain> Clone for DomainValue<T> {
    fn clone(&self) -> Self {
        DomainValue::raw(self.raw.clone())
    }
}

impl<T: ClosedDomain> PartialEq for DomainValue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T: ClosedDomain> Eq for DomainValue<T> {}

impl<T: ClosedDomain> fmt::Debug for DomainValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.raw)
    }
}

impl<T: ClosedDomain> fmt::Display for DomainValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
