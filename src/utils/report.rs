// src/utils/report.rs

use crate::physics::scene::ScenePlan;
use std::collections::HashMap;

const MAX_ROWS: usize = 20;

/// Text overview of a planned animation: composition, then one row per atom
pub fn plan_summary(plan: &ScenePlan) -> String {
  let mut counts: HashMap<&str, usize> = HashMap::new();
  for atom in &plan.atoms {
    *counts.entry(atom.symbol.as_str()).or_insert(0) += 1;
  }

  let mut parts: Vec<_> = counts.into_iter().collect();
  parts.sort_by(|a, b| a.0.cmp(b.0));

  let formula_str: String = parts
    .iter()
    .map(|(el, count)| format!("{}{}", el, count))
    .collect::<Vec<_>>()
    .join(" ");

  let mut out = String::new();
  out.push_str(&format!("Formula: {}\n", formula_str));
  out.push_str(&format!("Frames:  {}\n", plan.frame_count));
  out.push_str("------------------------------------------------------------------\n");
  out.push_str(&format!(
    "{:<8} {:<10} {:<8} {:<10} {:<10} {:<10} {:<10}\n",
    "Index", "Name", "Radius", "X", "Y", "Z", "Amplitude"
  ));
  out.push_str("------------------------------------------------------------------\n");

  for atom in plan.atoms.iter().take(MAX_ROWS) {
    out.push_str(&format!(
      "{:<8} {:<10} {:<8.3} {:<10.4} {:<10.4} {:<10.4} {:<10.4}\n",
      atom.index,
      atom.name,
      atom.radius,
      atom.position[0],
      atom.position[1],
      atom.position[2],
      atom.trajectory.max_displacement(atom.position)
    ));
  }

  if plan.atoms.len() > MAX_ROWS {
    out.push_str(&format!("... and {} more atoms.\n", plan.atoms.len() - MAX_ROWS));
  }

  out
}
