/*!
Variable bias evaluation.

The surveys incident to a variable are distilled into a single signed preference, the variable's bias.
Splitting the enabled edges of variable *i* by polarity and taking products of *(1 − survey)* over each side gives the probabilities that *i* is warned towards true and towards false; the bias is their normalised difference *W₊ − W₋*, in [-1, 1].

A variable whose every incident survey is 1 makes the normalisation 0/0.
As with a degenerate cavity during [survey propagation](crate::procedures::surveys), the warnings cancel and the bias is 0.

Decimation ranks variables by the magnitude of their bias and fixes the most decided ones to their preferred polarity.
*/

use crate::{graph::FactorGraph, structures::variable::VariableId};

impl FactorGraph {
    /// Recomputes the bias of the given variable from the surveys on its enabled edges.
    pub fn evaluate_bias(&mut self, variable: VariableId) {
        let mut positive = 1.0;
        let mut negative = 1.0;
        let mut all = 1.0;

        for edge in self.variable_enabled_edges(variable) {
            let held = 1.0 - self.edge(edge).survey;
            match self.edge(edge).polarity {
                true => positive *= held,
                false => negative *= held,
            }
            all *= held;
        }

        let warned_positive = (1.0 - positive) * negative;
        let warned_negative = (1.0 - negative) * positive;
        let total = warned_positive + warned_negative + all;

        let weight_positive = warned_positive / total;
        let weight_negative = warned_negative / total;

        let bias = match weight_positive.is_nan() || weight_negative.is_nan() {
            true => 0.0,
            false => weight_positive - weight_negative,
        };

        self.variable_mut(variable).bias = bias;
    }
}
