use serde::{Serialize, de::DeserializeOwned};

/// Decodes a JSON request body. An empty body decodes as `T::default()`.
pub fn json_decode<T>(value: &[u8]) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned + Default,
{
    if value.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(value)
}

pub fn json_encode<T>(value: &T) -> Result<Vec<u8>, serde_json::Error>
where
    T: Serialize,
{
    serde_json::to_vec(value)
}
