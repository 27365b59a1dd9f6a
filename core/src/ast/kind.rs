//! Node kinds and their human-readable names.

use core::fmt;

/// Discriminator for every expression node.
///
/// The numeric tags are stable: external producers that store a raw tag
/// can convert it back with [`Kind::try_from`].
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    /// A subtree that failed to parse.
    Error = 0,
    /// `n`
    Int = 1,
    /// `n1 + n2`
    Add = 2,
    /// `n1 - n2`
    Sub = 3,
    /// `n1 * n2`
    Mul = 4,
    /// `n1 / n2`
    Div = 5,
    /// `n1 % n2`
    Mod = 6,
    /// `-n`
    Neg = 7,
    /// `+n`
    Pos = 8,
}

/// Raw tag that does not name any [`Kind`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid node kind tag: {0}")]
pub struct InvalidKind(pub u8);

impl Kind {
    /// Every kind, in tag order.
    pub const ALL: [Kind; 9] = [
        Kind::Error,
        Kind::Int,
        Kind::Add,
        Kind::Sub,
        Kind::Mul,
        Kind::Div,
        Kind::Mod,
        Kind::Neg,
        Kind::Pos,
    ];

    /// Decode a raw tag that is known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `tag` is out of range. Producers must only emit declared
    /// kinds, so a bad tag here is a bug in the producer.
    pub fn from_tag(tag: u8) -> Kind {
        match Kind::try_from(tag) {
            Ok(kind) => kind,
            Err(err) => panic!("{err}"),
        }
    }

    /// The raw tag of this kind.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Number of children a node of this kind has.
    pub fn arity(self) -> usize {
        match self {
            Kind::Error | Kind::Int => 0,
            Kind::Neg | Kind::Pos => 1,
            Kind::Add | Kind::Sub | Kind::Mul | Kind::Div | Kind::Mod => 2,
        }
    }
}

impl TryFrom<u8> for Kind {
    type Error = InvalidKind;

    // `Self::Error` would be ambiguous with the `Kind::Error` variant.
    fn try_from(tag: u8) -> Result<Self, InvalidKind> {
        Kind::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or(InvalidKind(tag))
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(get_node_name(*self))
    }
}

/// Human-readable name of a node kind, as used in diagnostics and debug dumps.
pub fn get_node_name(kind: Kind) -> &'static str {
    match kind {
        Kind::Error => "error-expression",
        Kind::Int => "int-expression",
        Kind::Add => "add-expression",
        Kind::Sub => "sub-expression",
        Kind::Mul => "mul-expression",
        Kind::Div => "div-expression",
        Kind::Mod => "mod-expression",
        Kind::Neg => "neg-expression",
        Kind::Pos => "pos-expression",
    }
}
