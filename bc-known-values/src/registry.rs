//! The bundled numeric-to-name table. This is the subset of the upstream
//! Blockchain Commons known-values registry this workspace's core needs;
//! per spec.md §1, full registry/directory loaders are an external
//! collaborator concern.
pub const BUNDLED: &[(u64, &str)] = &[
    (1, "isA"),
    (2, "id"),
    (3, "parent"),
    (4, "body"),
    (5, "result"),
    (6, "error"),
    (7, "note"),
    (8, "content"),
    (9, "signed"),
    (10, "hasRecipient"),
    (11, "sskrShare"),
    (12, "controller"),
    (13, "publicKey"),
    (14, "dereferenceVia"),
    (15, "entity"),
    (16, "hasName"),
    (17, "language"),
    (18, "issuer"),
    (19, "holder"),
    (20, "salt"),
    (21, "date"),
    (22, "unknown"),
    (23, "diffEdits"),
    (24, "version"),
    (25, "attachment"),
    (26, "vendor"),
    (27, "conformsTo"),
    (28, "verifiedBy"),
    (29, "hasSecret"),
];
