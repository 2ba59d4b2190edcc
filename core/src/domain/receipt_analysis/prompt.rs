/// Prompt sent to the vision model alongside the receipt image.
///
/// The JSON skeleton at the end must stay in sync with
/// [`schema::receipt_analysis_schema`](super::schema::receipt_analysis_schema)
/// and the entity field names.
pub const RECEIPT_ANALYSIS_PROMPT: &str = r#"You are an experienced environmental analyst specialising in carbon footprints.

TASK: analyse the shopping receipt in the image and provide a thorough carbon-footprint assessment.

ANALYSIS STEPS:
1. Item identification: detect every product purchased on the receipt.
2. Product categories: group the products (red meat, white meat, dairy, processed food, plastic packaging, produce, organic).
3. Carbon-footprint score: compute a total score from 1 to 10 based on:
   - red meat (beef, lamb): +3 points
   - white meat (chicken, fish): +1.5 points
   - dairy products: +1 point
   - ultra-processed food: +2 points
   - excessive plastic packaging: +2 points
   - local produce: -0.5 points
   - organic products: -0.5 points
4. Insights: give 3-5 concrete, actionable suggestions.
5. Greener alternatives: suggest replacements for the items with the highest footprint.
6. Environmental fact: add one interesting fact related to the footprint found.

OUTPUT FORMAT (JSON only, no markdown):
{
    "score": 0,
    "dominant_category": "main category",
    "item_detail": "list of detected items",
    "score_breakdown": {
        "red_meat": 0,
        "white_meat": 0,
        "dairy": 0,
        "processed_food": 0,
        "plastic_packaging": 0,
        "produce": 0,
        "organic": 0
    },
    "insights": [
        "suggestion 1",
        "suggestion 2",
        "suggestion 3"
    ],
    "alternatives": [
        {"item": "product X", "replacement": "product Y", "reason": "why it is better"}
    ],
    "environmental_fact": "interesting fact",
    "estimated_emission_kg_co2": 0,
    "comparison": "equivalent to X km driven by car"
}
"#;
