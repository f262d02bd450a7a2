// src/io/display.rs

use crate::model::EoqSolution;

/// Explanation shown under the calculator.
pub const MODEL_EXPLANATION: &str = "\
Finding the Optimal Order Quantity for a Gas Station
The gas station owner's goal is to minimize the total cost per year, which includes:
Cost per liter of fuel: the purchase price and any transportation costs that do not depend on quantity.
This price is ignored by the model because the profit per liter does not change with the order quantity.
Delivery cost: a fixed cost (K) charged per truck delivery regardless of the amount delivered.
Holding cost: proportional to the amount of fuel stored and how long it is stored, written Q/2 x S, where
  S is the holding cost per liter per unit time (e.g. per year), and
  Q/2 is the average number of liters in storage.
We look for the order quantity (Q) that minimizes the total cost per year.";

/// The three result lines of the form.
pub fn result_lines(solution: &EoqSolution) -> [String; 3] {
    [
        format!("Optimal order quantity is: {}", solution.optimal_quantity),
        format!("cycle: {} in years(units time)", solution.cycle_length),
        format!("Your periodic cost is: {}", solution.periodic_cost),
    ]
}

/// Longer report printed with `--verbose`.
pub fn detailed_report(solution: &EoqSolution) -> String {
    format!(
        "Optimal order quantity (Q*): {:.3}\n\
         Cycle length (Q*/V):         {:.6} years\n\
         Orders per year (V/Q*):      {:.3}\n\
         Periodic cost (S*Q*):        {:.3}\n\
         Minimum total cost TC(Q*):   {:.3}",
        solution.optimal_quantity,
        solution.cycle_length,
        solution.orders_per_year,
        solution.periodic_cost,
        solution.minimum_total_cost,
    )
}
