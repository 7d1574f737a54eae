use crate::models::scan::Placement;

const MEDICINE_KEYWORD: &str = "medicine";
const FOOD_KEYWORD: &str = "food";

/// Derive a placement from annotation labels.
///
/// Case-insensitive substring match, first rule wins: any label containing
/// "medicine" beats any label containing "food".
pub fn classify<S: AsRef<str>>(labels: &[S]) -> Placement {
    let any_contains = |keyword: &str| {
        labels
            .iter()
            .any(|label| label.as_ref().to_lowercase().contains(keyword))
    };

    if any_contains(MEDICINE_KEYWORD) {
        Placement::MedicalCabinet
    } else if any_contains(FOOD_KEYWORD) {
        Placement::FoodStorage
    } else {
        Placement::Unknown
    }
}
