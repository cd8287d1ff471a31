//! Stature estimation and body segment proportions
//!
//! Stature equations take bone and skeletal lengths in centimetres and return
//! living stature in centimetres. Segment ratios are unit-agnostic: the result is
//! in whatever unit the input was given in.

use crate::catalogue::FormulaDescriptor;
use serde::{Deserialize, Serialize};

/// Living stature from skeletal height and age (Raxter et al., 2006)
pub fn stature_universal(age: f64, skeletal_height: f64) -> f64 {
    1.009 * skeletal_height - 0.0426 * age + 12.1
}

/// Living stature from femur length, white men (Trotter & Gleser, 1958)
pub fn stature_american_white_male(femur: f64) -> f64 {
    2.32 * femur + 65.53
}

/// Living stature from femur length, white women (Trotter & Gleser, 1952)
pub fn stature_american_white_female(femur: f64) -> f64 {
    2.47 * femur + 54.10
}

/// Living stature from femur length, black men (Trotter & Gleser, 1958)
pub fn stature_american_black_male(femur: f64) -> f64 {
    2.10 * femur + 72.22
}

/// Living stature from femur length, black women (Trotter & Gleser, 1952)
pub fn stature_american_black_female(femur: f64) -> f64 {
    2.28 * femur + 59.76
}

/// Stride length, men; same unit as `height`
pub fn stride_length_male(height: f64) -> f64 {
    0.415 * height
}

/// Stride length, women; same unit as `height`
pub fn stride_length_female(height: f64) -> f64 {
    0.413 * height
}

macro_rules! segments {
    ($(
        $variant:ident => $ratio:literal, $segment_fn:ident, $height_fn:ident,
            $segment_id:literal, $height_id:literal, $doc:literal;
    )*) => {
        /// Body segments with a fixed proportion of total body height (Drillis &
        /// Contini, 1966, as tabulated by Winter, 2009)
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum Segment {
            $(#[doc = $doc] $variant,)*
        }

        impl Segment {
            pub const ALL: &'static [Segment] = &[$(Segment::$variant),*];

            /// Segment length as a fraction of body height
            pub fn ratio(&self) -> f64 {
                match self {
                    $(Segment::$variant => $ratio,)*
                }
            }

            /// Segment length for a body height
            pub fn length(&self, body_height: f64) -> f64 {
                self.ratio() * body_height
            }

            /// Body height for a measured segment length
            pub fn body_height(&self, segment_length: f64) -> f64 {
                segment_length / self.ratio()
            }
        }

        $(
            #[doc = $doc]
            #[doc = ", from body height"]
            pub fn $segment_fn(body_height: f64) -> f64 {
                Segment::$variant.length(body_height)
            }

            #[doc = "Body height from: "]
            #[doc = $doc]
            pub fn $height_fn(segment_length: f64) -> f64 {
                Segment::$variant.body_height(segment_length)
            }
        )*

        pub(crate) static SEGMENT_FORMULAS: &[FormulaDescriptor] = &[
            $(
                formula!("anthropometry", $segment_id, Composition, Unary($segment_fn),
                    ("body_height": Centimeters / Positive) -> Centimeters,
                    "Winter DA (2009). Biomechanics and Motor Control of Human Movement, 4th ed."),
                formula!("anthropometry", $height_id, Composition, Unary($height_fn),
                    ("segment_length": Centimeters / Positive) -> Centimeters,
                    "Winter DA (2009). Biomechanics and Motor Control of Human Movement, 4th ed."),
            )*
        ];
    };
}

segments! {
    Eyes => 0.936, height_eyes, height_from_height_eyes,
        "height_eyes", "height_from_height_eyes", "Height of the eyes above the ground";
    Head => 0.870, height_head, height_from_height_head,
        "height_head", "height_from_height_head", "Height of the chin above the ground";
    Shoulders => 0.818, height_shoulders, height_from_height_shoulders,
        "height_shoulders", "height_from_height_shoulders", "Height of the shoulders";
    Chest => 0.720, height_chest, height_from_height_chest,
        "height_chest", "height_from_height_chest", "Height of the chest at the nipples";
    Elbow => 0.630, height_elbow, height_from_height_elbow,
        "height_elbow", "height_from_height_elbow", "Height of the elbows";
    Wrist => 0.485, height_wrist, height_from_height_wrist,
        "height_wrist", "height_from_height_wrist", "Height of the wrists";
    Fingertip => 0.377, height_fingertip, height_from_height_fingertip,
        "height_fingertip", "height_from_height_fingertip", "Height of the fingertips";
    Hips => 0.530, height_hips, height_from_height_hips,
        "height_hips", "height_from_height_hips", "Height of the hips";
    Buttocks => 0.485, height_buttocks, height_from_height_buttocks,
        "height_buttocks", "height_from_height_buttocks", "Height of the buttocks";
    Knee => 0.285, height_knee, height_from_height_knee,
        "height_knee", "height_from_height_knee", "Height of the knees";
    Ankle => 0.039, height_ankle, height_from_height_ankle,
        "height_ankle", "height_from_height_ankle", "Height of the ankles";
    HeadLength => 0.130, head_height, height_from_head_length,
        "head_height", "height_from_head_length", "Vertical length of the head";
    ShoulderDistance => 0.129, shoulder_distance, height_from_shoulder_distance,
        "shoulder_distance", "height_from_shoulder_distance",
        "Horizontal distance from the centre of the chest to the shoulder";
    ShoulderWidth => 0.259, shoulder_width, height_from_shoulder_width,
        "shoulder_width", "height_from_shoulder_width", "Width of the shoulders";
    HipsWidth => 0.191, hips_width, height_from_hips_width,
        "hips_width", "height_from_hips_width", "Width of the hips";
    NippleWidth => 0.174, nipple_width, height_from_nipple_width,
        "nipple_width", "height_from_nipple_width", "Horizontal distance between the nipples";
    FootWidth => 0.055, foot_width, height_from_foot_width,
        "foot_width", "height_from_foot_width", "Breadth of the foot";
    FootLength => 0.152, foot_length, height_from_foot_length,
        "foot_length", "height_from_foot_length", "Length of the foot";
    HumerusLength => 0.186, humerus_length, height_from_humerus_length,
        "humerus_length", "height_from_humerus_length", "Shoulder to elbow";
    ForearmLength => 0.146, forearm_length, height_from_forearm_length,
        "forearm_length", "height_from_forearm_length", "Elbow to wrist";
    HandLength => 0.108, hand_length, height_from_hand_length,
        "hand_length", "height_from_hand_length", "Length of the hand";
    UpperBodyLength => 0.520, upperbody_length, height_from_upperbody_length,
        "upperbody_length", "height_from_upperbody_length", "Length of the upper body";
}

pub(crate) static STATURE_FORMULAS: &[FormulaDescriptor] = &[
    formula!("stature", "stature_universal", Composition, Binary(stature_universal),
        ("age": Years / NonNegative, "skeletal_height": Centimeters / Positive) -> Centimeters,
        "Raxter MH, Auerbach BM, Ruff CB (2006). Am J Phys Anthropol 130:374-384"),
    formula!("stature", "stature_american_white_male", Composition, Unary(stature_american_white_male),
        ("femur": Centimeters / Positive) -> Centimeters,
        "Trotter M, Gleser GC (1958). Am J Phys Anthropol 16:79-123"),
    formula!("stature", "stature_american_white_female", Composition,
        Unary(stature_american_white_female),
        ("femur": Centimeters / Positive) -> Centimeters,
        "Trotter M, Gleser GC (1952). Am J Phys Anthropol 10:463-514"),
    formula!("stature", "stature_american_black_male", Composition, Unary(stature_american_black_male),
        ("femur": Centimeters / Positive) -> Centimeters,
        "Trotter M, Gleser GC (1958). Am J Phys Anthropol 16:79-123"),
    formula!("stature", "stature_american_black_female", Composition,
        Unary(stature_american_black_female),
        ("femur": Centimeters / Positive) -> Centimeters,
        "Trotter M, Gleser GC (1952). Am J Phys Anthropol 10:463-514"),
    formula!("anthropometry", "strideLengthMale", Composition, Unary(stride_length_male),
        ("height": Centimeters / Positive) -> Centimeters,
        "Hoffman MD (1971). Am J Phys Med"),
    formula!("anthropometry", "strideLengthFemale", Composition, Unary(stride_length_female),
        ("height": Centimeters / Positive) -> Centimeters,
        "Hoffman MD (1971). Am J Phys Med"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stature_from_femur() {
        assert!((stature_american_white_male(48.0) - 176.89).abs() < 1e-9);
        assert!((stature_american_white_female(44.0) - 162.78).abs() < 1e-9);
        assert!((stature_american_black_male(48.0) - 173.02).abs() < 1e-9);
        assert!((stature_american_black_female(44.0) - 160.08).abs() < 1e-9);
    }

    #[test]
    fn test_black_equations_are_distinct() {
        assert_ne!(stature_american_black_male(48.0), stature_american_white_male(48.0));
        assert_ne!(stature_american_black_female(44.0), stature_american_white_female(44.0));
    }

    #[test]
    fn test_stature_universal() {
        assert!((stature_universal(40.0, 160.0) - 171.836).abs() < 1e-9);
    }

    #[test]
    fn test_segment_round_trip() {
        for segment in Segment::ALL {
            let length = segment.length(180.0);
            assert!((segment.body_height(length) - 180.0).abs() < 1e-9, "{:?}", segment);
        }
        assert_eq!(Segment::ALL.len(), 22);
    }

    #[test]
    fn test_segment_functions() {
        assert!((height_shoulders(180.0) - 147.24).abs() < 1e-9);
        assert!((height_from_foot_length(27.36) - 180.0).abs() < 1e-9);
        assert!((stride_length_male(180.0) - 74.7).abs() < 1e-9);
    }
}
