use crate::modules::learning::domain::entities::Module;

/// Derives a learning item's cached progress percentage from its module set.
///
/// Pure and order-independent; the aggregate is the only writer of the
/// cached value and always goes through this calculator.
pub struct ProgressCalculator;

impl ProgressCalculator {
    /// Percentage of completed modules, 0-100, rounded half-up.
    /// An empty module set counts as 0.
    pub fn compute(modules: &[Module]) -> u32 {
        if modules.is_empty() {
            return 0;
        }

        let completed = modules.iter().filter(|m| m.status.is_done()).count();
        (completed as f64 / modules.len() as f64 * 100.0).round() as u32
    }
}
