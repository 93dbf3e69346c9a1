use crate::{Instance, Registry};

use polytable_core::{schema::TypeId, stmt::Value, Error, Operation, Result};

impl Registry {
    /// Prepares an instance for persistence.
    ///
    /// Attributes outside the type's allowed columns are dropped, or rejected
    /// when the type is strict, and the discriminator column is stamped. On
    /// error the instance is left untouched.
    pub fn project_for_write(&self, instance: &mut Instance) -> Result<()> {
        let ty = instance.ty();
        let extra = self.extra_attributes(instance);

        if !extra.is_empty() {
            let descriptor = self.descriptor(ty);
            if descriptor.strict {
                return Err(Error::invalid_attributes(
                    &descriptor.name,
                    Operation::Save,
                    extra,
                ));
            }
        }

        let discriminator = self.discriminator_value(ty)?;

        if !extra.is_empty() {
            tracing::trace!(
                ty = %self.descriptor(ty).name,
                dropped = ?extra,
                "dropping attributes outside the persisted set"
            );
            for column in &extra {
                instance.remove(column);
            }
        }

        let column = &self.hierarchy().table(ty).discriminator_column;
        instance.set(column.as_str(), discriminator);

        Ok(())
    }

    /// The hook to run before the storage collaborator saves an instance.
    pub fn prepare_save(&self, instance: &mut Instance) -> Result<()> {
        self.project_for_write(instance)
    }

    /// The value stored in the discriminator column for instances of
    /// exactly `ty`.
    ///
    /// A declared tag is passed through the type's transform, if any. A
    /// concrete type without a tag is stored under its name. An abstract type
    /// without a tag cannot be stored.
    pub fn discriminator_value(&self, ty: TypeId) -> Result<Value> {
        let descriptor = self.descriptor(ty);

        match (&descriptor.discriminator, descriptor.discriminator_transform) {
            (Some(tag), Some(transform)) => Ok(transform(tag)),
            (Some(tag), None) => Ok(tag.to_value()),
            (None, _) => descriptor
                .identity()
                .map(Value::from)
                .ok_or_else(|| Error::undeclared_discriminator(&descriptor.name)),
        }
    }

    fn extra_attributes(&self, instance: &Instance) -> Vec<String> {
        let allowed = self.resolve_instance_persisted(instance);
        if allowed.is_empty() {
            return vec![];
        }

        instance
            .attributes()
            .columns()
            .filter(|column| !allowed.contains(column))
            .map(String::from)
            .collect()
    }
}
