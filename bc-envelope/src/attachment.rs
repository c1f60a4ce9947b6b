//! Attachments: vendor-namespaced side data riding along as an ordinary
//! assertion, per the `'attachment'` known value.

use bc_known_values::known_values;

use crate::envelope::{Case, Envelope};

impl Envelope {
    /// Adds an `'attachment': { payload, 'vendor': vendor, 'conformsTo':
    /// conforms_to? }` assertion. `payload` is wrapped so its digest is
    /// stable regardless of what other metadata rides alongside it.
    pub fn add_attachment(&self, payload: Envelope, vendor: &str, conforms_to: Option<&str>) -> Envelope {
        let mut attachment = payload.wrap().add_assertion(
            Envelope::new_known_value(known_values::VENDOR),
            Envelope::new(vendor.to_string()),
        );
        if let Some(conforms_to) = conforms_to {
            attachment = attachment.add_assertion(
                Envelope::new_known_value(known_values::CONFORMS_TO),
                Envelope::new(conforms_to.to_string()),
            );
        }
        self.add_assertion(Envelope::new_known_value(known_values::ATTACHMENT), attachment)
    }

    /// Attachments on this envelope, optionally filtered by vendor and/or
    /// conformance identifier.
    pub fn attachments(&self, vendor: Option<&str>, conforms_to: Option<&str>) -> Vec<Envelope> {
        let attachment_predicate = Envelope::new_known_value(known_values::ATTACHMENT);
        self.assertions_with_predicate(&attachment_predicate)
            .into_iter()
            .filter_map(|a| match a.case() {
                Case::Assertion(_, object) => Some(object.clone()),
                _ => None,
            })
            .filter(|object| {
                let vendor_matches = vendor.map_or(true, |v| {
                    object
                        .object_for_predicate(&Envelope::new_known_value(known_values::VENDOR))
                        .and_then(|e| e.leaf().ok())
                        .and_then(|c| String::try_from(c).ok())
                        .map_or(false, |s| s == v)
                });
                let conforms_matches = conforms_to.map_or(true, |c| {
                    object
                        .object_for_predicate(&Envelope::new_known_value(known_values::CONFORMS_TO))
                        .and_then(|e| e.leaf().ok())
                        .and_then(|cbor| String::try_from(cbor).ok())
                        .map_or(false, |s| s == c)
                });
                vendor_matches && conforms_matches
            })
            .collect()
    }
}
