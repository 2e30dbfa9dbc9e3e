// src/model/attributes.rs

//! Per-element radius and colour lookup.
//!
//! Three tables are consulted in priority order: explicit overrides, a
//! user-supplied table, then the built-in defaults. Radius and colour are
//! resolved independently, so an override that only sets `r` still lets the
//! colour come from a lower tier.

use crate::config::ValidationPolicy;
use crate::error::{Result, VibError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type Rgb = [f64; 3];

/// Radius used when no table knows the symbol
pub const FALLBACK_RADIUS: f64 = 1.0;

/// One table entry. Field names follow the periodic-table file layout:
/// `{"H": {"r": 0.31, "col": [0.8, 0.8, 0.8]}}`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AtomAttributes {
  #[serde(rename = "r", default, skip_serializing_if = "Option::is_none")]
  pub radius: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub col: Option<Rgb>,
}

impl AtomAttributes {
  pub fn new(radius: f64, col: Rgb) -> Self {
    Self { radius: Some(radius), col: Some(col) }
  }

  pub fn radius_only(radius: f64) -> Self {
    Self { radius: Some(radius), col: None }
  }

  pub fn color_only(col: Rgb) -> Self {
    Self { radius: None, col: Some(col) }
  }

  fn problem(&self) -> Option<String> {
    if let Some(r) = self.radius {
      if !(r.is_finite() && r > 0.0) {
        return Some(format!("radius {} is not positive", r));
      }
    }
    if let Some(col) = self.col {
      if let Some(c) = col.iter().find(|c| !(0.0..=1.0).contains(*c)) {
        return Some(format!("colour channel {} outside [0, 1]", c));
      }
    }
    None
  }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeTable {
  entries: HashMap<String, AtomAttributes>,
}

impl AttributeTable {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, symbol: impl Into<String>, attributes: AtomAttributes) {
    self.entries.insert(symbol.into(), attributes);
  }

  pub fn get(&self, symbol: &str) -> Option<&AtomAttributes> {
    self.entries.get(symbol)
  }

  pub fn radius(&self, symbol: &str) -> Option<f64> {
    self.get(symbol).and_then(|a| a.radius)
  }

  pub fn color(&self, symbol: &str) -> Option<Rgb> {
    self.get(symbol).and_then(|a| a.col)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Checks radius > 0 and colour channels in [0, 1] under the given policy.
  /// Entries are visited in symbol order so the first reported problem is stable.
  pub fn validate(&self, policy: ValidationPolicy) -> Result<()> {
    if policy == ValidationPolicy::Off {
      return Ok(());
    }
    let mut symbols: Vec<&String> = self.entries.keys().collect();
    symbols.sort();
    for symbol in symbols {
      if let Some(reason) = self.entries[symbol].problem() {
        policy.report(VibError::InvalidAttribute { symbol: symbol.clone(), reason })?;
      }
    }
    Ok(())
  }
}

impl FromIterator<(String, AtomAttributes)> for AttributeTable {
  fn from_iter<I: IntoIterator<Item = (String, AtomAttributes)>>(iter: I) -> Self {
    Self { entries: iter.into_iter().collect() }
  }
}

/// First field value found across `sources`, skipping absent tiers
pub fn first_match<'a, S: 'a, T>(
  sources: impl IntoIterator<Item = Option<&'a S>>,
  field: impl Fn(&S) -> Option<T>,
) -> Option<T> {
  sources.into_iter().flatten().find_map(|s| field(s))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedAttributes {
  pub radius: f64,
  /// None when no table provides a colour
  pub color: Option<Rgb>,
}

impl ResolvedAttributes {
  pub fn color_or_placeholder(&self, symbol: &str) -> Rgb {
    self.color.unwrap_or_else(|| placeholder_color(symbol))
  }
}

pub fn resolve(
  symbol: &str,
  overrides: Option<&AttributeTable>,
  user: Option<&AttributeTable>,
  defaults: &AttributeTable,
) -> ResolvedAttributes {
  let sources = [overrides, user, Some(defaults)];
  ResolvedAttributes {
    radius: first_match(sources, |t| t.radius(symbol)).unwrap_or(FALLBACK_RADIUS),
    color: first_match(sources, |t| t.color(symbol)),
  }
}

/// Pseudo-random colour that is the same for a symbol on every call
pub fn placeholder_color(symbol: &str) -> Rgb {
  let mut rng = StdRng::seed_from_u64(fnv1a(symbol.as_bytes()));
  [rng.random::<f64>(), rng.random::<f64>(), rng.random::<f64>()]
}

fn fnv1a(bytes: &[u8]) -> u64 {
  bytes.iter().fold(0xcbf2_9ce4_8422_2325_u64, |hash, &b| {
    (hash ^ b as u64).wrapping_mul(0x0000_0100_0000_01b3)
  })
}
