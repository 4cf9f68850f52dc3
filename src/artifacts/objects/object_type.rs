use crate::errors::{Result, StatusError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Blob,
    Tree,
    Commit,
}

impl ObjectType {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
            ObjectType::Commit => "commit",
        }
    }

    /// Split a decompressed object into its type and payload
    ///
    /// The header is `<type> <size>\0`; the declared size is not checked against the
    /// payload length.
    pub fn parse_header(data: &[u8]) -> Result<(ObjectType, &[u8])> {
        let header_end = data
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| StatusError::undefined("object header terminator"))?;

        let header = std::str::from_utf8(&data[..header_end])
            .map_err(|_| StatusError::undefined("object header"))?;
        let (object_type, _size) = header
            .split_once(' ')
            .ok_or_else(|| StatusError::undefined("object type"))?;

        Ok((ObjectType::try_from(object_type)?, &data[header_end + 1..]))
    }
}

impl TryFrom<&str> for ObjectType {
    type Error = StatusError;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "blob" => Ok(ObjectType::Blob),
            "tree" => Ok(ObjectType::Tree),
            "commit" => Ok(ObjectType::Commit),
            other => Err(StatusError::undefined(format!("object type {other:?}"))),
        }
    }
}

impl std::fmt::Display for ObjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
