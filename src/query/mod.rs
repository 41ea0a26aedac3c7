// Query module
//
// Cost estimation for the cost-based optimizer lives under `optimizer`.

pub mod optimizer;
