/// The derivative of a single state component.
///
/// A system of `N` first-order ODEs is an ordered list of `N` equations, where
/// equation `i` returns `d(state[i])/dt` given the full state and the time.
/// The position in the list is the equation's identity.
///
/// Any `Fn(&[f64], f64) -> f64` is an equation. A system is passed to methods
/// and solvers as a slice of trait objects, so closures and custom types mix
/// freely:
///
/// ```
/// use odestep_core::Equation;
///
/// let dxdt = |s: &[f64], _t: f64| s[1];
/// let dvdt = |s: &[f64], _t: f64| -s[0];
/// let system: [&dyn Equation; 2] = [&dxdt, &dvdt];
///
/// assert_eq!(system[0].derivative(&[1.0, 2.0], 0.0), 2.0);
/// assert_eq!(system[1].derivative(&[1.0, 2.0], 0.0), -1.0);
/// ```
pub trait Equation {
    /// Returns the time derivative of this equation's state component.
    fn derivative(&self, state: &[f64], time: f64) -> f64;
}

impl<F> Equation for F
where
    F: Fn(&[f64], f64) -> f64,
{
    fn derivative(&self, state: &[f64], time: f64) -> f64 {
        self(state, time)
    }
}
