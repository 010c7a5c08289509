/// The fixed-step rule used to advance the populations.
///
/// Both methods produce one sample per step on the same time grid; they differ
/// only in the sampled populations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Method {
    /// Forward Euler: first order, one derivative evaluation per step.
    #[default]
    ForwardEuler,

    /// Classic fourth-order Runge–Kutta: four derivative evaluations per step.
    RungeKutta4,
}
