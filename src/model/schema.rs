#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Score,
    Flag,
    Measure,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub kind: FieldKind,
}

/// The 17 KOI input fields, in the order the inference backend expects them.
/// Order is part of the backend contract; do not reorder.
pub const FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "koi_score",
        label: "KOI Score",
        unit: "disposition score",
        kind: FieldKind::Score,
    },
    FieldDef {
        name: "koi_fpflag_nt",
        label: "FP Flag: Not Transit-Like",
        unit: "0 or 1",
        kind: FieldKind::Flag,
    },
    FieldDef {
        name: "koi_fpflag_ss",
        label: "FP Flag: Stellar Eclipse",
        unit: "0 or 1",
        kind: FieldKind::Flag,
    },
    FieldDef {
        name: "koi_fpflag_co",
        label: "FP Flag: Centroid Offset",
        unit: "0 or 1",
        kind: FieldKind::Flag,
    },
    FieldDef {
        name: "koi_fpflag_ec",
        label: "FP Flag: Ephemeris Match",
        unit: "0 or 1",
        kind: FieldKind::Flag,
    },
    FieldDef {
        name: "koi_period",
        label: "Orbital Period",
        unit: "days",
        kind: FieldKind::Measure,
    },
    FieldDef {
        name: "koi_time0bk",
        label: "Transit Epoch",
        unit: "BKJD",
        kind: FieldKind::Measure,
    },
    FieldDef {
        name: "koi_impact",
        label: "Impact Parameter",
        unit: "sky-plane",
        kind: FieldKind::Measure,
    },
    FieldDef {
        name: "koi_duration",
        label: "Transit Duration",
        unit: "hours",
        kind: FieldKind::Measure,
    },
    FieldDef {
        name: "koi_depth",
        label: "Transit Depth",
        unit: "ppm",
        kind: FieldKind::Measure,
    },
    FieldDef {
        name: "koi_prad",
        label: "Planetary Radius",
        unit: "Earth radii",
        kind: FieldKind::Measure,
    },
    FieldDef {
        name: "koi_teq",
        label: "Equilibrium Temperature",
        unit: "K",
        kind: FieldKind::Measure,
    },
    FieldDef {
        name: "koi_insol",
        label: "Insolation Flux",
        unit: "Earth flux",
        kind: FieldKind::Measure,
    },
    FieldDef {
        name: "koi_model_snr",
        label: "Transit SNR",
        unit: "signal-to-noise",
        kind: FieldKind::Measure,
    },
    FieldDef {
        name: "koi_steff",
        label: "Stellar Effective Temp",
        unit: "K",
        kind: FieldKind::Measure,
    },
    FieldDef {
        name: "koi_slogg",
        label: "Stellar Surface Gravity",
        unit: "log10(cm/s^2)",
        kind: FieldKind::Measure,
    },
    FieldDef {
        name: "koi_srad",
        label: "Stellar Radius",
        unit: "solar radii",
        kind: FieldKind::Measure,
    },
];

pub const FIELD_COUNT: usize = FIELDS.len();

/// A known-good KOI candidate record (a confirmed hot-Jupiter-like signal),
/// in schema order. Used by demos and tests.
pub const SAMPLE_CANDIDATE: [f64; FIELD_COUNT] = [
    0.87, 0.0, 0.0, 0.0, 0.0, 3.5224, 131.512, 0.146, 2.87, 1215.0, 2.26, 1244.0, 121.7, 35.8,
    5777.0, 4.438, 1.0,
];

/// Case-insensitive lookup of a field's schema position.
pub fn field_index(name: &str) -> Option<usize> {
    FIELDS
        .iter()
        .position(|f| f.name.eq_ignore_ascii_case(name.trim()))
}

pub fn is_flag(index: usize) -> bool {
    FIELDS
        .get(index)
        .is_some_and(|f| f.kind == FieldKind::Flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_count_is_17() {
        assert_eq!(FIELD_COUNT, 17);
        assert_eq!(SAMPLE_CANDIDATE.len(), FIELD_COUNT);
    }

    #[test]
    fn test_flag_fields_occupy_indices_1_to_4() {
        for (idx, field) in FIELDS.iter().enumerate() {
            let expect_flag = (1..=4).contains(&idx);
            assert_eq!(
                field.kind == FieldKind::Flag,
                expect_flag,
                "field {} at index {}",
                field.name,
                idx
            );
        }
    }

    #[test]
    fn test_field_index_case_insensitive() {
        assert_eq!(field_index("koi_depth"), Some(9));
        assert_eq!(field_index("KOI_DEPTH"), Some(9));
        assert_eq!(field_index(" koi_period "), Some(5));
        assert_eq!(field_index("koi_unknown"), None);
    }

    #[test]
    fn test_field_names_are_unique() {
        for (i, a) in FIELDS.iter().enumerate() {
            for b in FIELDS.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
