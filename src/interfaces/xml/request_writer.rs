use crate::domain::document::PaymentRequestDocument;
use crate::error::Result;

/// Serializes a PaymentCreate document.
///
/// Text content is escaped at the serializer's full quote level (`& < > " '`),
/// so values taken from settings or orders cannot alter the structure.
pub fn write_document(doc: &PaymentRequestDocument) -> Result<String> {
    Ok(quick_xml::se::to_string(doc)?)
}
