//! Selective disclosure: obscuring subtrees while preserving digest
//! identity (invariant I3). A walk over the target-digest set decides,
//! subtree by subtree, whether to obscure or recurse.

use std::collections::HashSet;

use bc_components::Digest;

use crate::envelope::Envelope;

/// The three ways a subtree can be obscured. All three preserve the
/// subtree's digest.
#[derive(Clone)]
pub enum ObscureAction {
    /// Replace with `Elided(digest)`.
    Elide,
    /// Encrypt under the given content key.
    #[cfg(feature = "encrypt")]
    Encrypt(bc_components::SymmetricKey),
    /// Store the canonical CBOR of the subtree, compressed.
    #[cfg(feature = "compress")]
    Compress,
}

impl Envelope {
    fn obscure(&self, action: &ObscureAction) -> Envelope {
        match action {
            ObscureAction::Elide => Envelope::new_elided(self.digest()),
            #[cfg(feature = "encrypt")]
            ObscureAction::Encrypt(key) => self.encrypt_subject(key),
            #[cfg(feature = "compress")]
            ObscureAction::Compress => self.compress_subject(),
        }
    }

    /// Obscures every subtree whose digest is in `targets`, recursing into
    /// everything else.
    pub fn elide_removing(&self, targets: &HashSet<Digest>, action: ObscureAction) -> Envelope {
        self.elide_with(targets, &action, true)
    }

    /// Obscures every subtree whose digest is *not* in `targets` and is not
    /// an ancestor of a target (the "dominator closure"), recursing only
    /// through ancestors of a target.
    pub fn elide_keeping(&self, targets: &HashSet<Digest>, action: ObscureAction) -> Envelope {
        self.elide_with(targets, &action, false)
    }

    fn elide_with(&self, targets: &HashSet<Digest>, action: &ObscureAction, removing: bool) -> Envelope {
        if targets.contains(&self.digest()) {
            return if removing { self.obscure(action) } else { self.clone() };
        }
        if !removing && !self.is_ancestor_of_target(targets) {
            return self.obscure(action);
        }
        self.recurse_into_children(targets, action, removing)
    }

    fn is_ancestor_of_target(&self, targets: &HashSet<Digest>) -> bool {
        self.collect_digests().iter().any(|d| targets.contains(d))
    }

    fn recurse_into_children(
        &self,
        targets: &HashSet<Digest>,
        action: &ObscureAction,
        removing: bool,
    ) -> Envelope {
        use crate::envelope::Case;
        match self.case() {
            Case::Node(subject, assertions) => {
                let new_subject = subject.elide_with(targets, action, removing);
                let mut result = new_subject;
                for assertion in assertions {
                    let new_assertion = assertion.elide_with(targets, action, removing);
                    result = result.add_assertion_envelope(new_assertion);
                }
                result
            }
            Case::Assertion(predicate, object) => Envelope::new_assertion(
                predicate.elide_with(targets, action, removing),
                object.elide_with(targets, action, removing),
            ),
            Case::Wrapped(inner) => inner.elide_with(targets, action, removing).wrap(),
            _ => self.clone(),
        }
    }
}
