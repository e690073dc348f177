use crate::constants::REQUEST_ID_LENGTH;

/// Generates a request correlation id.
///
/// The id is `REQUEST_ID_LENGTH` characters long, drawn from uppercase
/// English letters (`A-Z`) and digits (`0-9`) with `nanoid`.
///
/// # Examples
/// ```
/// use storefront_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 30);
/// ```
#[must_use]
pub fn request_id() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(REQUEST_ID_LENGTH, &alphabet)
}
