/// Order-creation payload: an ordered list of ingredient identifiers.
///
/// No client-side validation; whether the identifiers exist (or the list is
/// allowed to be empty) is entirely the service's call.
#[derive(serde::Serialize, Clone, Debug)]
pub struct OrderRequest {
    pub ingredients: Vec<String>,
}

impl OrderRequest {
    pub fn new<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}
