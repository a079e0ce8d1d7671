//! CP multiplier table.
//!
//! The game scales base+IV stats by a per-level multiplier. The table is
//! indexed by half-level steps: index 0 is level 1, index 1 is level 1.5,
//! and the last index is level 55.

use crate::level::Level;

/// Number of entries in [`CP_MULTIPLIERS`].
pub const TABLE_LEN: usize = 109;

/// CP multipliers for levels 1 through 55 in half-level steps.
///
/// Strictly increasing.
pub static CP_MULTIPLIERS: [f64; TABLE_LEN] = [
    0.0939999967813491, 0.135137430784308, 0.166397869586944, 0.192650914456886,
    0.215732470154762, 0.236572655026622, 0.255720049142837, 0.273530381100769,
    0.29024988412857, 0.306057381335773, 0.321087598800659, 0.335445032295077,
    0.349212676286697, 0.36245774877879, 0.375235587358474, 0.387592411085168,
    0.399567276239395, 0.41119354951725, 0.422500014305114, 0.432926413410414,
    0.443107545375824, 0.453059953871985, 0.46279838681221, 0.472336077786704,
    0.481684952974319, 0.490855810259008, 0.499858438968658, 0.508701756943992,
    0.517393946647644, 0.525942508771329, 0.534354329109191, 0.542635762230353,
    0.550792694091796, 0.558830599438087, 0.566754519939422, 0.574569148039264,
    0.582278907299041, 0.589887911977272, 0.59740000963211, 0.604823657502073,
    0.61215728521347, 0.61940411056605, 0.626567125320434, 0.633649181622743,
    0.640652954578399, 0.647580963301656, 0.654435634613037, 0.661219263506722,
    0.667934000492096, 0.674581899290818, 0.681164920330047, 0.687684905887771,
    0.694143652915954, 0.700542893277978, 0.706884205341339, 0.713169102333341,
    0.719399094581604, 0.725575616972598, 0.731700003147125, 0.734741011137376,
    0.737769484519958, 0.740785574597326, 0.743789434432983, 0.746781208702482,
    0.749761044979095, 0.752729105305821, 0.75568550825119, 0.758630366519684,
    0.761563837528228, 0.764486065255226, 0.767397165298461, 0.77029727397159,
    0.77318650484085, 0.776064945942412, 0.778932750225067, 0.781790064808426,
    0.784636974334716, 0.787473583646825, 0.790300011634826, 0.792803950958807,
    0.795300006866455, 0.79780392148697, 0.800300002098083, 0.802803892322847,
    0.805299997329711, 0.807803863460723, 0.81029999256134, 0.812803834895026,
    0.815299987792968, 0.817803806620319, 0.820299983024597, 0.822803778631297,
    0.825299978256225, 0.827803750922782, 0.830299973487854, 0.832803753381377,
    0.835300028324127, 0.837803755931569, 0.840300023555755, 0.842803729034748,
    0.845300018787384, 0.847803702398935, 0.850300014019012, 0.852803676019539,
    0.85530000925064, 0.857803649892077, 0.860300004482269, 0.862803624012168,
    0.865299999713897,
];

/// Look up the multiplier for a level.
///
/// # Examples
///
/// ```rust
/// use ivrank::{cpm, Level};
///
/// let level = Level::new(40.0).unwrap();
/// assert_eq!(cpm::multiplier(level), 0.790300011634826);
/// ```
pub fn multiplier(level: Level) -> f64 {
    CP_MULTIPLIERS[level.index()]
}

/// Find the table index for an estimated multiplier.
///
/// Returns the index of the entry equal to `target` if there is one,
/// otherwise the index of the largest entry strictly less than `target`.
/// Returns `None` when `target` is below the first entry (no level is low
/// enough) or is NaN.
///
/// # Examples
///
/// ```rust
/// use ivrank::cpm::{index_for_estimate, CP_MULTIPLIERS};
///
/// assert_eq!(index_for_estimate(CP_MULTIPLIERS[10]), Some(10));
/// assert_eq!(index_for_estimate(CP_MULTIPLIERS[10] + 1e-9), Some(10));
/// assert_eq!(index_for_estimate(0.01), None);
/// assert_eq!(index_for_estimate(5.0), Some(CP_MULTIPLIERS.len() - 1));
/// ```
pub fn index_for_estimate(target: f64) -> Option<usize> {
    if target.is_nan() {
        return None;
    }

    let mut start = 0;
    let mut end = CP_MULTIPLIERS.len();
    while start < end {
        let mid = (start + end) / 2;
        let cpm = CP_MULTIPLIERS[mid];
        if cpm < target {
            start = mid + 1;
        } else if cpm > target {
            end = mid;
        } else {
            return Some(mid);
        }
    }

    // `start` is now the first entry greater than `target`
    start.checked_sub(1)
}
