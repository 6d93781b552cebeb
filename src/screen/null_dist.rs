//! Empirical null distribution for the pairwise coincidence statistic.
//!
//! The table holds coincidence percentages sampled at 0.1-percentile steps
//! over 0..=100 (1001 entries, ascending). It was derived offline from
//! coincidence percentages of presumed-independent unit pairs pooled across
//! many recording sessions; that derivation pipeline is not part of this
//! crate, and the table is never recomputed at runtime.

use crate::error::{Result, ScreenError};

/// Null-distribution quantiles of the coincidence percentage, one entry per
/// 0.1 percentile from 0.0 through 100.0.
#[rustfmt::skip]
pub static NULL_COINCIDENCE: [f64; 1001] = [
    0.0, 0.000176, 0.000435, 0.000737, 0.001071,
    0.001433, 0.001817, 0.002222, 0.002645, 0.003085,
    0.00354, 0.004009, 0.004492, 0.004988, 0.005496,
    0.006016, 0.006547, 0.007088, 0.00764, 0.008202,
    0.008773, 0.009354, 0.009944, 0.010542, 0.011149,
    0.011765, 0.012388, 0.01302, 0.013659, 0.014306,
    0.014961, 0.015623, 0.016292, 0.016968, 0.017652,
    0.018342, 0.019039, 0.019742, 0.020453, 0.021169,
    0.021892, 0.022622, 0.023357, 0.024099, 0.024847,
    0.025601, 0.026361, 0.027126, 0.027898, 0.028675,
    0.029458, 0.030247, 0.031041, 0.031841, 0.032647,
    0.033457, 0.034274, 0.035095, 0.035923, 0.036755,
    0.037592, 0.038435, 0.039283, 0.040137, 0.040995,
    0.041858, 0.042727, 0.0436, 0.044479, 0.045362,
    0.046251, 0.047144, 0.048042, 0.048945, 0.049853,
    0.050766, 0.051683, 0.052606, 0.053533, 0.054465,
    0.055401, 0.056342, 0.057288, 0.058239, 0.059194,
    0.060154, 0.061118, 0.062087, 0.063061, 0.064039,
    0.065021, 0.066009, 0.067, 0.067996, 0.068997,
    0.070002, 0.071012, 0.072026, 0.073044, 0.074067,
    0.075095, 0.076126, 0.077162, 0.078203, 0.079248,
    0.080297, 0.081351, 0.082408, 0.083471, 0.084537,
    0.085608, 0.086683, 0.087763, 0.088847, 0.089935,
    0.091027, 0.092124, 0.093225, 0.09433, 0.095439,
    0.096553, 0.097671, 0.098793, 0.099919, 0.10105,
    0.102185, 0.103324, 0.104467, 0.105614, 0.106766,
    0.107922, 0.109082, 0.110246, 0.111415, 0.112588,
    0.113764, 0.114945, 0.116131, 0.11732, 0.118513,
    0.119711, 0.120913, 0.122119, 0.123329, 0.124544,
    0.125762, 0.126985, 0.128212, 0.129443, 0.130678,
    0.131918, 0.133161, 0.134409, 0.135661, 0.136917,
    0.138177, 0.139441, 0.140709, 0.141982, 0.143259,
    0.14454, 0.145825, 0.147114, 0.148407, 0.149705,
    0.151006, 0.152312, 0.153622, 0.154937, 0.156255,
    0.157577, 0.158904, 0.160235, 0.16157, 0.162909,
    0.164252, 0.1656, 0.166952, 0.168307, 0.169667,
    0.171032, 0.1724, 0.173773, 0.175149, 0.17653,
    0.177916, 0.179305, 0.180699, 0.182096, 0.183498,
    0.184905, 0.186315, 0.18773, 0.189148, 0.190572,
    0.191999, 0.19343, 0.194866, 0.196306, 0.19775,
    0.199199, 0.200652, 0.202109, 0.20357, 0.205036,
    0.206505, 0.207979, 0.209458, 0.21094, 0.212427,
    0.213919, 0.215414, 0.216914, 0.218418, 0.219926,
    0.221439, 0.222956, 0.224478, 0.226003, 0.227533,
    0.229068, 0.230606, 0.23215, 0.233697, 0.235249,
    0.236805, 0.238366, 0.239931, 0.2415, 0.243074,
    0.244652, 0.246234, 0.247821, 0.249413, 0.251009,
    0.252609, 0.254214, 0.255823, 0.257436, 0.259054,
    0.260677, 0.262304, 0.263935, 0.265571, 0.267212,
    0.268857, 0.270506, 0.27216, 0.273819, 0.275482,
    0.277149, 0.278822, 0.280498, 0.28218, 0.283865,
    0.285556, 0.287251, 0.28895, 0.290655, 0.292363,
    0.294077, 0.295795, 0.297518, 0.299245, 0.300977,
    0.302714, 0.304455, 0.306201, 0.307952, 0.309707,
    0.311467, 0.313232, 0.315002, 0.316776, 0.318555,
    0.320339, 0.322127, 0.323921, 0.325719, 0.327522,
    0.329329, 0.331142, 0.332959, 0.334781, 0.336608,
    0.33844, 0.340277, 0.342118, 0.343965, 0.345816,
    0.347672, 0.349533, 0.3514, 0.353271, 0.355146,
    0.357027, 0.358913, 0.360804, 0.3627, 0.364601,
    0.366507, 0.368417, 0.370333, 0.372254, 0.37418,
    0.376111, 0.378047, 0.379989, 0.381935, 0.383886,
    0.385843, 0.387804, 0.389771, 0.391743, 0.39372,
    0.395703, 0.39769, 0.399683, 0.401681, 0.403684,
    0.405692, 0.407706, 0.409725, 0.411749, 0.413779,
    0.415814, 0.417854, 0.419899, 0.42195, 0.424006,
    0.426068, 0.428135, 0.430207, 0.432285, 0.434368,
    0.436457, 0.438551, 0.440651, 0.442756, 0.444867,
    0.446983, 0.449104, 0.451231, 0.453364, 0.455502,
    0.457646, 0.459796, 0.461951, 0.464112, 0.466278,
    0.46845, 0.470628, 0.472811, 0.475, 0.477195,
    0.479396, 0.481602, 0.483814, 0.486032, 0.488256,
    0.490485, 0.492721, 0.494962, 0.497209, 0.499462,
    0.501721, 0.503985, 0.506256, 0.508533, 0.510815,
    0.513104, 0.515398, 0.517699, 0.520006, 0.522318,
    0.524637, 0.526962, 0.529293, 0.53163, 0.533973,
    0.536322, 0.538678, 0.54104, 0.543407, 0.545782,
    0.548162, 0.550549, 0.552942, 0.555341, 0.557747,
    0.560158, 0.562577, 0.565001, 0.567433, 0.56987,
    0.572314, 0.574764, 0.577221, 0.579685, 0.582154,
    0.584631, 0.587114, 0.589603, 0.5921, 0.594602,
    0.597112, 0.599628, 0.602151, 0.60468, 0.607216,
    0.609759, 0.612309, 0.614866, 0.617429, 0.619999,
    0.622576, 0.62516, 0.627751, 0.630349, 0.632953,
    0.635565, 0.638184, 0.640809, 0.643442, 0.646082,
    0.648729, 0.651383, 0.654044, 0.656712, 0.659387,
    0.66207, 0.66476, 0.667457, 0.670161, 0.672873,
    0.675592, 0.678318, 0.681052, 0.683793, 0.686542,
    0.689298, 0.692061, 0.694832, 0.697611, 0.700397,
    0.703191, 0.705992, 0.708801, 0.711617, 0.714442,
    0.717274, 0.720113, 0.722961, 0.725816, 0.728679,
    0.73155, 0.734429, 0.737316, 0.740211, 0.743113,
    0.746024, 0.748943, 0.751869, 0.754804, 0.757747,
    0.760698, 0.763657, 0.766625, 0.769601, 0.772585,
    0.775577, 0.778577, 0.781586, 0.784604, 0.787629,
    0.790664, 0.793706, 0.796758, 0.799817, 0.802886,
    0.805962, 0.809048, 0.812142, 0.815245, 0.818357,
    0.821477, 0.824607, 0.827745, 0.830892, 0.834048,
    0.837213, 0.840387, 0.843569, 0.846761, 0.849962,
    0.853172, 0.856392, 0.85962, 0.862858, 0.866105,
    0.869361, 0.872627, 0.875902, 0.879186, 0.88248,
    0.885784, 0.889097, 0.892419, 0.895751, 0.899093,
    0.902445, 0.905806, 0.909177, 0.912558, 0.915948,
    0.919349, 0.922759, 0.92618, 0.92961, 0.933051,
    0.936501, 0.939962, 0.943433, 0.946914, 0.950406,
    0.953907, 0.957419, 0.960942, 0.964475, 0.968018,
    0.971572, 0.975137, 0.978712, 0.982298, 0.985894,
    0.989502, 0.99312, 0.996749, 1.000389, 1.00404,
    1.007702, 1.011375, 1.015059, 1.018754, 1.02246,
    1.026178, 1.029907, 1.033647, 1.037399, 1.041162,
    1.044937, 1.048723, 1.052521, 1.05633, 1.060152,
    1.063984, 1.067829, 1.071686, 1.075555, 1.079435,
    1.083328, 1.087233, 1.091149, 1.095079, 1.09902,
    1.102974, 1.10694, 1.110918, 1.114909, 1.118913,
    1.122929, 1.126958, 1.131, 1.135054, 1.139121,
    1.143201, 1.147295, 1.151401, 1.15552, 1.159653,
    1.163799, 1.167958, 1.17213, 1.176316, 1.180515,
    1.184728, 1.188955, 1.193195, 1.197449, 1.201717,
    1.205999, 1.210295, 1.214605, 1.218929, 1.223267,
    1.227619, 1.231986, 1.236367, 1.240763, 1.245173,
    1.249598, 1.254038, 1.258492, 1.262961, 1.267446,
    1.271945, 1.276459, 1.280988, 1.285533, 1.290093,
    1.294669, 1.29926, 1.303866, 1.308488, 1.313126,
    1.31778, 1.32245, 1.327135, 1.331837, 1.336555,
    1.341289, 1.34604, 1.350807, 1.35559, 1.36039,
    1.365207, 1.370041, 1.374891, 1.379759, 1.384643,
    1.389545, 1.394464, 1.399401, 1.404354, 1.409326,
    1.414315, 1.419322, 1.424347, 1.42939, 1.43445,
    1.439529, 1.444627, 1.449742, 1.454876, 1.460029,
    1.465201, 1.470391, 1.4756, 1.480829, 1.486076,
    1.491343, 1.496629, 1.501934, 1.50726, 1.512605,
    1.517969, 1.523354, 1.528759, 1.534184, 1.53963,
    1.545095, 1.550582, 1.556089, 1.561617, 1.567166,
    1.572736, 1.578327, 1.58394, 1.589574, 1.59523,
    1.600907, 1.606607, 1.612328, 1.618072, 1.623838,
    1.629627, 1.635438, 1.641271, 1.647128, 1.653008,
    1.658911, 1.664837, 1.670787, 1.67676, 1.682758,
    1.688779, 1.694824, 1.700894, 1.706988, 1.713107,
    1.71925, 1.725419, 1.731612, 1.737831, 1.744076,
    1.750346, 1.756641, 1.762963, 1.769311, 1.775685,
    1.782086, 1.788513, 1.794968, 1.801449, 1.807958,
    1.814494, 1.821058, 1.827649, 1.834269, 1.840917,
    1.847594, 1.854299, 1.861033, 1.867796, 1.874588,
    1.88141, 1.888262, 1.895143, 1.902055, 1.908997,
    1.91597, 1.922973, 1.930008, 1.937074, 1.944171,
    1.9513, 1.958461, 1.965655, 1.972881, 1.98014,
    1.987431, 1.994756, 2.002115, 2.009507, 2.016934,
    2.024395, 2.03189, 2.03942, 2.046986, 2.054586,
    2.062223, 2.069895, 2.077604, 2.085349, 2.093132,
    2.100951, 2.108808, 2.116703, 2.124635, 2.132607,
    2.140617, 2.148666, 2.156754, 2.164882, 2.173051,
    2.181259, 2.189509, 2.197799, 2.206131, 2.214505,
    2.222921, 2.231379, 2.239881, 2.248425, 2.257014,
    2.265646, 2.274323, 2.283045, 2.291812, 2.300625,
    2.309483, 2.318389, 2.327341, 2.33634, 2.345388,
    2.354483, 2.363627, 2.372821, 2.382064, 2.391357,
    2.4007, 2.410095, 2.419541, 2.429039, 2.43859,
    2.448194, 2.457851, 2.467562, 2.477328, 2.487149,
    2.497026, 2.506959, 2.516948, 2.526995, 2.537101,
    2.547264, 2.557487, 2.567769, 2.578112, 2.588516,
    2.598981, 2.609509, 2.620099, 2.630754, 2.641472,
    2.652255, 2.663104, 2.67402, 2.685002, 2.696052,
    2.707171, 2.718359, 2.729618, 2.740947, 2.752347,
    2.763821, 2.775367, 2.786987, 2.798683, 2.810454,
    2.822302, 2.834228, 2.846232, 2.858316, 2.870479,
    2.882725, 2.895052, 2.907463, 2.919958, 2.932538,
    2.945205, 2.957959, 2.970802, 2.983734, 2.996757,
    3.009872, 3.02308, 3.036383, 3.04978, 3.063275,
    3.076867, 3.090558, 3.10435, 3.118244, 3.132241,
    3.146343, 3.160551, 3.174866, 3.18929, 3.203824,
    3.218471, 3.233231, 3.248106, 3.263098, 3.278208,
    3.293439, 3.308791, 3.324267, 3.339868, 3.355596,
    3.371454, 3.387443, 3.403565, 3.419822, 3.436216,
    3.452749, 3.469424, 3.486242, 3.503206, 3.520319,
    3.537582, 3.554998, 3.57257, 3.590299, 3.608189,
    3.626243, 3.644462, 3.66285, 3.68141, 3.700145,
    3.719057, 3.73815, 3.757427, 3.776892, 3.796546,
    3.816395, 3.836441, 3.856689, 3.877141, 3.897802,
    3.918676, 3.939766, 3.961077, 3.982613, 4.004379,
    4.026379, 4.048617, 4.071099, 4.093829, 4.116813,
    4.140056, 4.163563, 4.18734, 4.211392, 4.235726,
    4.260347, 4.285262, 4.310478, 4.336001, 4.361838,
    4.387997, 4.414485, 4.441309, 4.468478, 4.496,
    4.523883, 4.552137, 4.580771, 4.609793, 4.639215,
    4.669046, 4.699297, 4.72998, 4.761105, 4.792685,
    4.824733, 4.857261, 4.890283, 4.923812, 4.957865,
    4.992456, 5.027602, 5.063318, 5.099623, 5.136535,
    5.174074, 5.212258, 5.251111, 5.290653, 5.330908,
    5.371901, 5.413656, 5.456202, 5.499567, 5.54378,
    5.588873, 5.634881, 5.681837, 5.729781, 5.778751,
    5.828789, 5.879941, 5.932254, 5.985778, 6.040567,
    6.096679, 6.154176, 6.213124, 6.273592, 6.335657,
    6.399401, 6.464911, 6.532282, 6.601618, 6.673028,
    6.746635, 6.822569, 6.900974, 6.982009, 7.065844,
    7.152669, 7.242695, 7.336153, 7.433301, 7.534426,
    7.639851, 7.749937, 7.865094, 7.985788, 8.11255,
    8.24599, 8.386814, 8.535848, 8.694056, 8.862588,
    9.042815, 9.236401, 9.445386, 9.67231, 9.92039,
    10.193781, 10.497977, 10.840459, 11.231766, 11.687429,
    12.231682, 12.905439, 13.7861, 15.049448, 17.26571,
    42.521155,
];

/// Look up the significance cutoff for a percentile in (0, 100].
///
/// `percentile` selects entry `floor(10 * percentile)`; 100.0 resolves to
/// the last entry. Values outside (0, 100] are rejected, never clamped.
pub fn cutoff_value(percentile: f64) -> Result<f64> {
    if !(percentile > 0.0 && percentile <= 100.0) {
        return Err(ScreenError::InvalidPercentile(percentile));
    }
    let idx = (10.0 * percentile).floor() as usize;
    Ok(NULL_COINCIDENCE[idx])
}
