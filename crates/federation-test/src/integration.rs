//! End-to-end pipeline
//!
//! Generic entity -> validation -> Diaspora adapter -> element tree -> XML.

use federation_core::{Entity, FederationResult};
use federation_diaspora::{adapt, DiasporaEntity, FromBase};
use federation_wire::XmlWriter;

/// Validate, narrow and render a generic entity as a payload document.
///
/// `fill` sets protocol-only fields (signatures) before rendering.
pub fn render_payload_with<P, F>(
    base: &P::Base,
    writer: &XmlWriter,
    fill: F,
) -> FederationResult<String>
where
    P: FromBase + DiasporaEntity,
    F: FnOnce(&mut P),
{
    base.validate()?;

    let mut entity: P = adapt(base);
    fill(&mut entity);

    Ok(writer.to_string(&entity.to_payload()))
}

/// Validate, narrow and render a generic entity as a payload document
pub fn render_payload<P>(base: &P::Base, writer: &XmlWriter) -> FederationResult<String>
where
    P: FromBase + DiasporaEntity,
{
    render_payload_with::<P, _>(base, writer, |_| {})
}
