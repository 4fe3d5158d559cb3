//! Mana colors, costs, and the per-position mana pool.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
    Colorless,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Colorless,
    ];

    /// The five colors, without colorless.
    pub const COLORED: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Blue => "blue",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Colorless => "colorless",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mana cost of a card.
///
/// Colored components must be paid with mana of that color. The colorless
/// component can be paid with any mana left over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Cost {
    pub white: u32,
    pub blue: u32,
    pub black: u32,
    pub red: u32,
    pub green: u32,
    pub colorless: u32,
}

impl Cost {
    /// A cost of nothing.
    #[must_use]
    pub fn free() -> Self {
        Self::default()
    }

    /// A purely generic cost.
    #[must_use]
    pub fn colorless(amount: u32) -> Self {
        Self {
            colorless: amount,
            ..Self::default()
        }
    }

    /// Set one component (builder pattern).
    #[must_use]
    pub fn with(mut self, color: Color, amount: u32) -> Self {
        *self.component_mut(color) = amount;
        self
    }

    #[must_use]
    pub fn get(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white,
            Color::Blue => self.blue,
            Color::Black => self.black,
            Color::Red => self.red,
            Color::Green => self.green,
            Color::Colorless => self.colorless,
        }
    }

    fn component_mut(&mut self, color: Color) -> &mut u32 {
        match color {
            Color::White => &mut self.white,
            Color::Blue => &mut self.blue,
            Color::Black => &mut self.black,
            Color::Red => &mut self.red,
            Color::Green => &mut self.green,
            Color::Colorless => &mut self.colorless,
        }
    }

    /// Converted cost: the sum of all components.
    #[must_use]
    pub fn total(&self) -> u32 {
        Color::ALL.iter().map(|&c| self.get(c)).sum()
    }

    /// Whether `available` can pay this cost.
    ///
    /// Every colored component needs at least that much of its color; what is
    /// left over afterwards, colorless included, must cover the colorless part.
    #[must_use]
    pub fn is_satisfied_by(&self, available: &ManaPool) -> bool {
        let mut leftover = available.get(Color::Colorless);
        for color in Color::COLORED {
            let have = available.get(color);
            let need = self.get(color);
            if have < need {
                return false;
            }
            leftover += have - need;
        }
        leftover >= self.colorless
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = Color::ALL
            .iter()
            .filter(|&&c| self.get(c) > 0)
            .map(|&c| format!("{} {}", self.get(c), c))
            .collect();
        if parts.is_empty() {
            f.write_str("free")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

/// Mana a position has available, by color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManaPool {
    amounts: [u32; 6],
}

impl ManaPool {
    /// An empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an amount (builder pattern).
    #[must_use]
    pub fn with(mut self, color: Color, amount: u32) -> Self {
        self.amounts[color.index()] = amount;
        self
    }

    pub fn add(&mut self, color: Color, amount: u32) {
        self.amounts[color.index()] += amount;
    }

    #[must_use]
    pub fn get(&self, color: Color) -> u32 {
        self.amounts[color.index()]
    }

    /// Empty every color.
    pub fn reset(&mut self) {
        self.amounts = [0; 6];
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.amounts.iter().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Spend mana for `cost`.
    ///
    /// Colored components come out of their own color. The colorless part is
    /// taken from colorless mana first, then from the remaining colors in
    /// white, blue, black, red, green order. Nothing is spent if the cost
    /// can't be paid.
    pub fn pay(&mut self, cost: &Cost) -> Result<()> {
        if !cost.is_satisfied_by(self) {
            return Err(GameError::invalid(
                "The card cost must be satisfied in order for it to be played.",
            ));
        }

        for color in Color::COLORED {
            self.amounts[color.index()] -= cost.get(color);
        }

        let mut owed = cost.colorless;
        for color in std::iter::once(Color::Colorless).chain(Color::COLORED) {
            let slot = &mut self.amounts[color.index()];
            let taken = owed.min(*slot);
            *slot -= taken;
            owed -= taken;
        }

        Ok(())
    }
}
