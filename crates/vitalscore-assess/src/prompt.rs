use vitalscore_core::models::questionnaire::{Gender, QuestionnaireAnswers};
use vitalscore_core::models::scores::DerivedScores;
use vitalscore_scoring::all_categories;

pub const SYSTEM_PROMPT: &str = "\
You are a paediatric health screening assistant. You review lifestyle \
questionnaires completed by school students aged 6 to 17 and estimate their \
risk of lifestyle-related health problems such as obesity, type 2 diabetes \
and hypertension. You are not diagnosing anyone. Base the estimate only on \
the answers provided, keep the language suitable for a student and their \
parents, and make every recommendation concrete and achievable.

Reply with a single JSON object and nothing else, using exactly these fields:
{
  \"riskLevel\": \"Low\" | \"Medium\" | \"High\",
  \"riskPercentage\": integer from 0 to 100,
  \"confidenceScore\": integer from 0 to 100,
  \"explanation\": string of two to four sentences,
  \"keyRiskFactors\": non-empty array of strings,
  \"recommendations\": non-empty array of strings
}";

/// Render the questionnaire as the user message for a risk request.
///
/// The student's name and school are left out; the model sees only what it
/// needs to estimate risk.
pub fn user_prompt(answers: &QuestionnaireAnswers, scores: &DerivedScores) -> String {
    let d = &answers.demographics;
    let gender = match d.gender {
        Some(Gender::Male) => "male",
        Some(Gender::Female) => "female",
        Some(Gender::Other) => "other",
        None => "not stated",
    };

    let mut prompt = String::from(
        "Assess the lifestyle-related health risk of the following student.\n\n",
    );
    prompt.push_str("### Student\n");
    prompt.push_str(&format!("- Age: {} years\n", d.age));
    prompt.push_str(&format!("- Gender: {gender}\n"));
    prompt.push_str(&format!("- Height: {} cm\n", d.height));
    prompt.push_str(&format!("- Weight: {} kg\n", d.weight));
    prompt.push_str(&format!(
        "- BMI: {:.1} ({})\n\n",
        scores.bmi,
        scores.bmi_category.label()
    ));

    for category in all_categories() {
        prompt.push_str(&category.to_structured_input(answers));
    }

    prompt.push_str("Respond with the JSON object only.");
    prompt
}
