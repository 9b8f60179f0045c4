
/// Blend a background value `p` toward a foreground value `q`
///
/// Computes `p * (1 - alpha) + q * alpha`.  Alpha is not limited to [0,1];
/// values outside extrapolate past either end point.
///
/// See [Alpha Compositing](https://en.wikipedia.org/wiki/Alpha_compositing)
pub fn blend(p: f64, q: f64, alpha: f64) -> f64 {
    p * (1.0 - alpha) + q * alpha
}

/// Round to the nearest integer, ties to even
///
/// Half-way values go to the even neighbor so that 0.5 -> 0 and 1.5 -> 2
pub fn iround(v: f64) -> i64 {
    v.round_ties_even() as i64
}

/// Smallest integer not less than `v`
pub fn iceil(v: f64) -> i64 {
    v.ceil() as i64
}

/// Largest integer not greater than `v`
pub fn ifloor(v: f64) -> i64 {
    v.floor() as i64
}
