//! Static letter statistics for the built-in languages
//!
//! Frequencies are percentages of letters a-z in running text. The Dutch
//! row is reproduced as published, including its mis-scaled entries.

/// Expected frequency (percent) of each letter `a..=z`, per language.
pub const LETTER_FREQUENCIES: [(&str, [f64; 26]); 15] = [
    (
        "english",
        [
            8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015,
            6.094, 6.966, 0.153, 0.772, 4.025, 2.406, 6.749,
            7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758,
            0.978, 2.36, 0.15, 1.974, 0.074,
        ],
    ),
    (
        "french",
        [
            7.636, 0.901, 3.26, 3.669, 14.715, 1.066, 0.866,
            0.737, 7.529, 0.613, 0.074, 5.456, 2.968, 7.095,
            5.796, 2.521, 1.362, 6.693, 7.948, 7.244, 6.311,
            1.838, 0.049, 0.427, 0.128, 0.326,
        ],
    ),
    (
        "german",
        [
            6.516, 1.886, 2.732, 5.076, 16.396, 1.656, 3.009,
            4.577, 6.55, 0.268, 1.417, 3.437, 2.534, 9.776,
            2.594, 0.67, 0.018, 7.003, 7.27, 6.154, 4.166,
            0.846, 1.921, 0.034, 0.039, 1.134,
        ],
    ),
    (
        "spanish",
        [
            11.525, 2.215, 4.019, 5.01, 12.181, 0.692, 1.768,
            0.703, 6.247, 0.493, 0.011, 4.967, 3.157, 6.712,
            8.683, 2.51, 0.877, 6.871, 7.977, 4.632, 2.927,
            1.138, 0.017, 0.215, 1.008, 0.467,
        ],
    ),
    (
        "portuguese",
        [
            14.634, 1.043, 3.882, 4.992, 12.57, 1.023, 1.303,
            0.781, 6.186, 0.397, 0.015, 2.779, 4.738, 4.446,
            9.735, 2.523, 1.204, 6.53, 6.805, 4.336, 3.639,
            1.575, 0.037, 0.253, 0.006, 0.47,
        ],
    ),
    (
        "esperanto",
        [
            12.117, 0.98, 0.776, 3.044, 8.995, 1.037, 1.171,
            0.384, 10.012, 3.501, 4.163, 6.104, 2.994, 7.955,
            8.779, 2.755, 0.0, 5.914, 6.092, 5.276, 3.183,
            1.904, 0.0, 0.0, 0.0, 0.494,
        ],
    ),
    (
        "italian",
        [
            11.745, 0.927, 4.501, 3.736, 11.792, 1.153, 1.644,
            0.636, 10.143, 0.011, 0.009, 6.51, 2.512, 6.883,
            9.832, 3.056, 0.505, 6.367, 4.981, 5.623, 3.011,
            2.097, 0.033, 0.003, 0.02, 1.181,
        ],
    ),
    (
        "turkish",
        [
            11.92, 2.844, 0.963, 4.706, 8.912, 0.461, 1.253,
            1.212, 0.0086, 0.034, 4.683, 5.922, 3.752, 7.487,
            2.476, 0.886, 0.0, 6.722, 3.014, 3.314, 3.235,
            0.959, 0.0, 0.0, 3.336, 1.5,
        ],
    ),
    (
        "swedish",
        [
            9.383, 1.535, 1.486, 4.702, 10.149, 2.027, 2.862,
            2.09, 5.817, 0.614, 3.14, 5.275, 3.471, 8.542,
            4.482, 1.839, 0.02, 8.431, 6.59, 7.691, 1.919,
            2.415, 0.142, 0.159, 0.708, 0.07,
        ],
    ),
    (
        "polish",
        [
            10.503, 1.74, 3.895, 3.725, 7.352, 0.143, 1.731,
            1.015, 8.328, 1.836, 2.753, 2.564, 2.515, 6.237,
            6.667, 2.445, 0.0, 5.243, 5.224, 2.475, 2.062,
            0.012, 5.813, 0.004, 3.206, 4.852,
        ],
    ),
    (
        "dutch",
        [
            7.486, 1.584, 1.242, 5.933, 0.01891, 0.805, 3.403,
            2.38, 6.499, 0.00146, 2.248, 3.568, 2.213, 10.032,
            6.063, 0.00157, 0.009, 6.411, 0.00373, 0.00679, 0.00199,
            0.00285, 0.00152, 0.036, 0.035, 0.00139,
        ],
    ),
    (
        "danish",
        [
            6.025, 2.0, 0.565, 5.858, 15.453, 2.406, 4.077,
            1.621, 6.0, 0.73, 3.395, 5.229, 3.237, 7.24,
            4.636, 1.756, 0.007, 8.956, 5.805, 6.862, 1.979,
            2.332, 0.069, 0.028, 0.698, 0.034,
        ],
    ),
    (
        "icelandic",
        [
            10.11, 1.043, 0.0, 1.575, 6.418, 3.013, 4.241,
            1.871, 7.578, 1.144, 3.314, 4.532, 4.041, 7.711,
            2.166, 0.789, 0.0, 8.581, 5.63, 4.953, 4.562,
            2.437, 0.0, 0.046, 0.9, 0.0,
        ],
    ),
    (
        "finnish",
        [
            12.217, 0.281, 0.281, 1.043, 7.968, 0.194, 0.392,
            1.851, 10.817, 2.042, 4.973, 5.761, 3.202, 8.826,
            5.614, 1.842, 0.013, 2.872, 7.862, 8.75, 5.008,
            2.25, 0.094, 0.031, 1.745, 0.051,
        ],
    ),
    (
        "czech",
        [
            8.421, 0.822, 0.74, 3.475, 7.562, 0.084, 0.092,
            1.356, 6.073, 1.433, 2.894, 3.802, 2.446, 6.468,
            6.695, 1.906, 0.001, 4.799, 5.212, 5.727, 2.16,
            5.344, 0.016, 0.027, 1.043, 1.503,
        ],
    ),
];

/// Expected index of coincidence of plaintext, per language.
pub const COINCIDENCE_TARGETS: [(&str, f64); 5] = [
    ("french", 0.074),
    ("english", 0.065),
    ("german", 0.072),
    ("spanish", 0.074),
    ("italian", 0.075),
];
