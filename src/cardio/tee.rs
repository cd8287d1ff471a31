//! Total energy expenditure (Institute of Medicine, 2005), kcal/day
//!
//! Every equation takes weight in kilograms, height in **metres** and age in
//! years. Each sex and age group has its own intercept, age slope and
//! weight/height terms; the activity level scales the weight/height terms by a
//! physical-activity coefficient (PA).

use crate::catalogue::FormulaDescriptor;

struct Equation {
    intercept: f64,
    age: f64,
    weight: f64,
    height: f64,
}

const CHILD_MALE: Equation = Equation {
    intercept: 88.5,
    age: 61.9,
    weight: 26.7,
    height: 903.0,
};

const CHILD_FEMALE: Equation = Equation {
    intercept: 135.3,
    age: 30.8,
    weight: 10.0,
    height: 934.0,
};

const ADULT_MALE: Equation = Equation {
    intercept: 662.0,
    age: 9.53,
    weight: 15.9,
    height: 540.0,
};

const ADULT_FEMALE: Equation = Equation {
    intercept: 354.0,
    age: 6.91,
    weight: 9.36,
    height: 726.0,
};

impl Equation {
    fn tee(&self, pa: f64, weight: f64, height: f64, age: f64) -> f64 {
        self.intercept - self.age * age + pa * (self.weight * weight + self.height * height)
    }
}

pub fn child_male_sedentary_tee(weight: f64, height: f64, age: f64) -> f64 {
    CHILD_MALE.tee(1.0, weight, height, age)
}

pub fn child_female_sedentary_tee(weight: f64, height: f64, age: f64) -> f64 {
    CHILD_FEMALE.tee(1.0, weight, height, age)
}

pub fn child_male_low_tee(weight: f64, height: f64, age: f64) -> f64 {
    CHILD_MALE.tee(1.13, weight, height, age)
}

pub fn child_female_low_tee(weight: f64, height: f64, age: f64) -> f64 {
    CHILD_FEMALE.tee(1.16, weight, height, age)
}

pub fn child_male_active_tee(weight: f64, height: f64, age: f64) -> f64 {
    CHILD_MALE.tee(1.26, weight, height, age)
}

pub fn child_female_active_tee(weight: f64, height: f64, age: f64) -> f64 {
    CHILD_FEMALE.tee(1.31, weight, height, age)
}

pub fn child_male_very_active_tee(weight: f64, height: f64, age: f64) -> f64 {
    CHILD_MALE.tee(1.42, weight, height, age)
}

pub fn child_female_very_active_tee(weight: f64, height: f64, age: f64) -> f64 {
    CHILD_FEMALE.tee(1.56, weight, height, age)
}

pub fn adult_male_sedentary_tee(weight: f64, height: f64, age: f64) -> f64 {
    ADULT_MALE.tee(1.0, weight, height, age)
}

pub fn adult_female_sedentary_tee(weight: f64, height: f64, age: f64) -> f64 {
    ADULT_FEMALE.tee(1.0, weight, height, age)
}

pub fn adult_male_low_tee(weight: f64, height: f64, age: f64) -> f64 {
    ADULT_MALE.tee(1.11, weight, height, age)
}

pub fn adult_female_low_tee(weight: f64, height: f64, age: f64) -> f64 {
    ADULT_FEMALE.tee(1.12, weight, height, age)
}

pub fn adult_male_active_tee(weight: f64, height: f64, age: f64) -> f64 {
    ADULT_MALE.tee(1.25, weight, height, age)
}

pub fn adult_female_active_tee(weight: f64, height: f64, age: f64) -> f64 {
    ADULT_FEMALE.tee(1.27, weight, height, age)
}

pub fn adult_male_very_active_tee(weight: f64, height: f64, age: f64) -> f64 {
    ADULT_MALE.tee(1.48, weight, height, age)
}

pub fn adult_female_very_active_tee(weight: f64, height: f64, age: f64) -> f64 {
    ADULT_FEMALE.tee(1.45, weight, height, age)
}

macro_rules! tee_formula {
    ($name:literal, $func:path) => {
        formula!("tee", $name, Cardiovascular, Ternary($func),
            ("weight": Kilograms / Positive, "height": Meters / Positive, "age": Years / NonNegative)
                -> KilocaloriesPerDay,
            "Institute of Medicine (2005). Dietary Reference Intakes for Energy, ch. 5")
    };
}

pub(crate) static TEE_FORMULAS: &[FormulaDescriptor] = &[
    tee_formula!("childMaleSedentaryTee", child_male_sedentary_tee),
    tee_formula!("childFemaleSedentaryTee", child_female_sedentary_tee),
    tee_formula!("childMaleLowTee", child_male_low_tee),
    tee_formula!("childFemaleLowTee", child_female_low_tee),
    tee_formula!("childMaleActiveTee", child_male_active_tee),
    tee_formula!("childFemaleActiveTee", child_female_active_tee),
    tee_formula!("childMaleVeryActiveTee", child_male_very_active_tee),
    tee_formula!("childFemaleVeryActiveTee", child_female_very_active_tee),
    tee_formula!("adultMaleSedentaryTee", adult_male_sedentary_tee),
    tee_formula!("adultFemaleSedentaryTee", adult_female_sedentary_tee),
    tee_formula!("adultMaleLowTee", adult_male_low_tee),
    tee_formula!("adultFemaleLowTee", adult_female_low_tee),
    tee_formula!("adultMaleActiveTee", adult_male_active_tee),
    tee_formula!("adultFemaleActiveTee", adult_female_active_tee),
    tee_formula!("adultMaleVeryActiveTee", adult_male_very_active_tee),
    tee_formula!("adultFemaleVeryActiveTee", adult_female_very_active_tee),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_equations() {
        assert!((child_male_sedentary_tee(30.0, 1.35, 9.0) - 1551.45).abs() < 1e-6);
        assert!((child_female_very_active_tee(30.0, 1.35, 9.0) - 2293.104).abs() < 1e-6);
    }

    #[test]
    fn test_adult_equations() {
        assert!((adult_male_sedentary_tee(80.0, 1.8, 30.0) - 2620.1).abs() < 1e-6);
        assert!((adult_female_sedentary_tee(60.0, 1.65, 30.0) - 1906.2).abs() < 1e-6);
    }

    #[test]
    fn test_female_activity_levels_use_female_base() {
        let sedentary = adult_female_sedentary_tee(60.0, 1.65, 30.0);
        let low = adult_female_low_tee(60.0, 1.65, 30.0);
        // only the PA coefficient changes between levels
        let terms = 9.36 * 60.0 + 726.0 * 1.65;
        assert!((low - sedentary - 0.12 * terms).abs() < 1e-9);
    }

    #[test]
    fn test_activity_monotonic() {
        let levels = [
            adult_male_sedentary_tee(75.0, 1.78, 45.0),
            adult_male_low_tee(75.0, 1.78, 45.0),
            adult_male_active_tee(75.0, 1.78, 45.0),
            adult_male_very_active_tee(75.0, 1.78, 45.0),
        ];
        assert!(levels.windows(2).all(|w| w[0] < w[1]));
    }
}
