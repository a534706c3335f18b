use crate::schema::DirectiveSchema;
use crate::Session;

#[derive(Debug, thiserror::Error)]
pub enum SchemaStoreError {
    #[error("Failed to encode directive schemas: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Failed to decode directive schemas: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

#[derive(serde::Deserialize, serde::Serialize)]
struct StoredSchemas {
    schemas: Vec<DirectiveSchema>,
}

/// Persists the schemas cached in a [`Session`] so a later run can warm its
/// session without re-parsing every directive type's docblock.
pub struct SchemaStore;
impl SchemaStore {
    pub fn export(session: &Session) -> Result<Vec<u8>, SchemaStoreError> {
        let stored = StoredSchemas {
            schemas: session
                .schemas()
                .iter()
                .map(|schema| schema.as_ref().clone())
                .collect(),
        };
        Ok(bincode::serde::encode_to_vec(&stored, bincode::config::standard())?)
    }

    /// Adds every stored schema the session does not already have. Returns
    /// how many were added.
    pub fn import(session: &Session, bytes: &[u8]) -> Result<usize, SchemaStoreError> {
        let (stored, _) = bincode::serde::decode_from_slice::<StoredSchemas, _>(
            bytes,
            bincode::config::standard(),
        )?;

        let mut added = 0;
        for schema in stored.schemas {
            if session.schema(&schema.name).is_none() {
                session.insert_schema(schema);
                added += 1;
            }
        }
        log::debug!("Imported {added} directive schema(s).");
        Ok(added)
    }
}
