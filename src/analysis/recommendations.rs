//! Canned advice lookup keyed by condition category.

use crate::core::{Condition, ConditionCategory};

/// Always included, regardless of findings.
const BASE_RECOMMENDATIONS: &[&str] = &[
    "Schedule regular check-ups with your healthcare provider",
    "Maintain a balanced diet rich in fruits and vegetables",
    "Engage in regular physical activity (30 minutes daily)",
];

/// Category blocks in the order they are checked. Conditions in the same
/// category share one block, so it cannot be appended twice.
const CATEGORY_ORDER: &[ConditionCategory] = &[
    ConditionCategory::Glycemic,
    ConditionCategory::BloodPressure,
    ConditionCategory::Cholesterol,
    ConditionCategory::ExcessWeight,
    ConditionCategory::Underweight,
];

fn category_block(category: ConditionCategory) -> &'static [&'static str] {
    match category {
        ConditionCategory::Glycemic => &[
            "Monitor blood glucose levels regularly",
            "Limit sugar and refined carbohydrate intake",
            "Consider consulting with an endocrinologist",
        ],
        ConditionCategory::BloodPressure => &[
            "Reduce sodium intake to less than 2,300mg per day",
            "Practice stress management techniques",
            "Monitor blood pressure regularly at home",
        ],
        ConditionCategory::Cholesterol => &[
            "Choose foods low in saturated fat and cholesterol",
            "Increase intake of omega-3 fatty acids",
            "Consider cholesterol-lowering medications if prescribed",
        ],
        ConditionCategory::ExcessWeight => &[
            "Create a calorie-controlled meal plan",
            "Increase physical activity gradually",
            "Consider consulting with a nutritionist",
        ],
        ConditionCategory::Underweight => &[
            "Increase calorie intake with nutrient-dense foods",
            "Include strength training exercises",
            "Consult with a healthcare provider for weight gain plan",
        ],
    }
}

/// Base advice plus one block per matched condition category.
pub fn generate_recommendations(conditions: &[Condition]) -> Vec<String> {
    let mut recommendations: Vec<String> =
        BASE_RECOMMENDATIONS.iter().map(|r| r.to_string()).collect();

    for &category in CATEGORY_ORDER {
        if conditions.iter().any(|c| c.category() == category) {
            recommendations.extend(category_block(category).iter().map(|r| r.to_string()));
        }
    }

    recommendations
}
