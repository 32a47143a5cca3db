use alloy::primitives::{Address, Selector};
use std::fmt;

/// Mirrors the `IDiamond.FacetCutAction` enum, encoded on chain as `uint8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FacetCutAction {
    Add = 0,
    Replace = 1,
    Remove = 2,
}

impl FacetCutAction {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for FacetCutAction {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Add),
            1 => Ok(Self::Replace),
            2 => Ok(Self::Remove),
            other => Err(other),
        }
    }
}

impl fmt::Display for FacetCutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "Add",
            Self::Replace => "Replace",
            Self::Remove => "Remove",
        };
        f.write_str(name)
    }
}

/// One entry of a `diamondCut` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetCut {
    pub facet_address: Address,
    pub action: FacetCutAction,
    pub function_selectors: Vec<Selector>,
}

impl FacetCut {
    pub fn add(facet_address: Address, function_selectors: Vec<Selector>) -> Self {
        Self {
            facet_address,
            action: FacetCutAction::Add,
            function_selectors,
        }
    }

    pub fn replace(facet_address: Address, function_selectors: Vec<Selector>) -> Self {
        Self {
            facet_address,
            action: FacetCutAction::Replace,
            function_selectors,
        }
    }

    /// Removal never points at facet code, so the target is always the zero address.
    pub fn remove(function_selectors: Vec<Selector>) -> Self {
        Self {
            facet_address: Address::ZERO,
            action: FacetCutAction::Remove,
            function_selectors,
        }
    }
}
