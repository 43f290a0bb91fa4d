// src/model/elements.rs

use crate::config::Rgb;
use serde::Deserialize;

/// Element family. Declaration order is the legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
  AlkaliMetal,
  AlkalineEarth,
  TransitionMetal,
  PostTransitionMetal,
  Metalloid,
  Nonmetal,
  NobleGas,
  Lanthanide,
  Actinide,
}

impl Category {
  pub const ALL: [Category; 9] = [
    Category::AlkaliMetal,
    Category::AlkalineEarth,
    Category::TransitionMetal,
    Category::PostTransitionMetal,
    Category::Metalloid,
    Category::Nonmetal,
    Category::NobleGas,
    Category::Lanthanide,
    Category::Actinide,
  ];

  pub fn label(self) -> &'static str {
    match self {
      Category::AlkaliMetal => "Alkali Metals",
      Category::AlkalineEarth => "Alkaline Earth",
      Category::TransitionMetal => "Transition Metals",
      Category::PostTransitionMetal => "Post-Transition",
      Category::Metalloid => "Metalloids",
      Category::Nonmetal => "Nonmetals",
      Category::NobleGas => "Noble Gases",
      Category::Lanthanide => "Lanthanides",
      Category::Actinide => "Actinides",
    }
  }

  /// Tile and legend fill colour (classic 16-colour palette).
  pub fn color(self) -> Rgb {
    match self {
      Category::AlkaliMetal => (0.33, 0.33, 1.00),         // Light Blue
      Category::AlkalineEarth => (1.00, 0.33, 1.00),       // Light Magenta
      Category::TransitionMetal => (0.66, 0.66, 0.66),     // Light Grey
      Category::PostTransitionMetal => (1.00, 1.00, 0.33), // Yellow
      Category::Metalloid => (0.66, 0.33, 0.00),           // Brown
      Category::Nonmetal => (0.33, 1.00, 0.33),            // Light Green
      Category::NobleGas => (1.00, 0.33, 0.33),            // Light Red
      Category::Lanthanide => (0.00, 0.66, 0.66),          // Cyan
      Category::Actinide => (0.33, 1.00, 1.00),            // Light Cyan
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
  S,
  P,
  D,
  F,
}

impl Block {
  pub fn label(self) -> &'static str {
    match self {
      Block::S => "s",
      Block::P => "p",
      Block::D => "d",
      Block::F => "f",
    }
  }
}

/// One row of the element table. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementRecord {
  pub atomic_number: u32,
  pub symbol: String,
  pub name: String,
  pub atomic_weight: f64,
  /// Shown verbatim, never parsed.
  pub electron_configuration: String,
  pub category: Category,
  pub block: Block,
}
