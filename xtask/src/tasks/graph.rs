//! Step dependency graph utilities.

use std::any::TypeId;
use std::collections::HashMap;

use super::Task;
use crate::error::TaskError;

/// Order steps so every step comes after its dependencies.
///
/// Kahn's algorithm that always picks the earliest-declared ready step, so
/// independent steps keep their declaration order. Dependencies on steps
/// outside `tasks` are ignored. Returns indices into `tasks`.
///
/// # Errors
///
/// Returns [`TaskError::DependencyCycle`] naming the steps left unordered.
pub fn order(tasks: &[&dyn Task]) -> Result<Vec<usize>, TaskError> {
    let type_to_idx: HashMap<TypeId, usize> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| (t.task_id(), i))
        .collect();

    let mut in_degree: Vec<usize> = vec![0; tasks.len()];
    let mut reverse_deps: Vec<Vec<usize>> = vec![Vec::new(); tasks.len()];
    for (i, t) in tasks.iter().enumerate() {
        for dep in t.dependencies() {
            if let Some(&dep_idx) = type_to_idx.get(dep)
                && let Some(rd) = reverse_deps.get_mut(dep_idx)
            {
                rd.push(i);
                if let Some(count) = in_degree.get_mut(i) {
                    *count += 1;
                }
            }
        }
    }

    let mut ordered = Vec::with_capacity(tasks.len());
    let mut done = vec![false; tasks.len()];
    while let Some(idx) = (0..tasks.len()).find(|&i| {
        !done.get(i).copied().unwrap_or(true) && in_degree.get(i).copied() == Some(0)
    }) {
        if let Some(flag) = done.get_mut(idx) {
            *flag = true;
        }
        ordered.push(idx);
        for &dependent in reverse_deps.get(idx).map_or(&[][..], Vec::as_slice) {
            if let Some(count) = in_degree.get_mut(dependent) {
                *count -= 1;
            }
        }
    }

    if ordered.len() == tasks.len() {
        Ok(ordered)
    } else {
        let stuck: Vec<&str> = tasks
            .iter()
            .zip(&done)
            .filter(|&(_, &d)| !d)
            .map(|(t, _)| t.name())
            .collect();
        Err(TaskError::DependencyCycle(stuck.join(", ")))
    }
}
