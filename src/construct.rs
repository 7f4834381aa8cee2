//! Instance Factory Protocol
//!
//! The construction pipeline: run the factory body to obtain a raw
//! descriptor, validate and classify its shape, tag the public interface with
//! the factory identity, and run the one-time constructor with the caller's
//! arguments.

use crate::descriptor::Descriptor;
use crate::error::ConstructError;
use crate::factory::Factory;
use crate::instance::Instance;
use crate::value::Value;
use tracing::{debug, instrument, trace};

/// Run the full construction protocol for one instance.
///
/// Each call is independent: the factory body runs once, building fresh
/// private state, and the constructor (when one is declared) runs exactly
/// once, synchronously, with `args` in caller order before the instance is
/// returned. Constructor failures propagate unchanged; mutations they
/// performed before failing remain visible (no rollback).
#[instrument(skip(factory, args), fields(factory = %factory.name(), id = %factory.id(), args = args.len()))]
pub fn construct(factory: &Factory, args: &[Value]) -> Result<Instance, ConstructError> {
    trace!("invoking factory body");
    let raw = factory.produce();

    let descriptor = Descriptor::classify(raw)?;
    debug!(
        shape = descriptor.shape_name(),
        entries = descriptor.header().len(),
        "descriptor classified"
    );

    let (ctor, header) = match descriptor {
        Descriptor::PublicOnly { header } => (None, header),
        Descriptor::WithConstructor { ctor, header } => (Some(ctor), header),
    };

    // Identity tagging happens before the constructor runs; the instance is
    // bound to the factory from the moment it exists.
    let instance = Instance::tagged(factory.id(), header);

    let ctor = match ctor {
        Some(ctor) => ctor,
        None => {
            if !args.is_empty() {
                return Err(ConstructError::MissingConstructor {
                    supplied: args.len(),
                });
            }
            debug!("instance constructed");
            return Ok(instance);
        }
    };

    trace!("running constructor");
    ctor.invoke(args)?;

    debug!("instance constructed");
    Ok(instance)
}
