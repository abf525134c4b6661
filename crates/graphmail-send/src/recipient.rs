//! Recipient parsing

/// A single To/Cc/Bcc entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    /// Display name, if the entry carried one
    pub name: Option<String>,
    /// Email address
    pub address: String,
}

impl Recipient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            name: None,
            address: address.into(),
        }
    }

    pub fn with_name(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            address: address.into(),
        }
    }

    /// Parse `"Display Name:address"` or a bare `"address"`.
    ///
    /// Only the first `:` separates name from address. An entry without a
    /// colon, or with nothing before it, has no display name.
    pub fn parse(entry: &str) -> Self {
        match entry.split_once(':') {
            Some((name, address)) => {
                let name = name.trim();
                Self {
                    name: (!name.is_empty()).then(|| name.to_string()),
                    address: address.trim().to_string(),
                }
            }
            None => Self::new(entry.trim()),
        }
    }
}

impl From<&str> for Recipient {
    fn from(entry: &str) -> Self {
        Self::parse(entry)
    }
}

impl From<String> for Recipient {
    fn from(entry: String) -> Self {
        Self::parse(&entry)
    }
}

/// Parse every entry of a recipient list, preserving order
pub(crate) fn parse_all<I, S>(entries: I) -> Vec<Recipient>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .map(|entry| Recipient::parse(entry.as_ref()))
        .collect()
}
