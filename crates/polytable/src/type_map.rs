use crate::Registry;

use polytable_core::{
    schema::TypeId,
    stmt::{Discriminator, Value},
    Error, Result,
};

use indexmap::IndexMap;
use std::sync::Arc;

/// Discriminator tags reachable from a root type, mapped to the concrete
/// type each tag constructs.
///
/// Entries are kept in discovery order: the root's own tag first, then each
/// declared subclass depth-first in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap {
    root: TypeId,
    entries: IndexMap<Discriminator, TypeId>,

    /// Tags as actually stored when a discriminator transform rewrites the
    /// declared tag on write.
    aliases: IndexMap<Discriminator, TypeId>,
}

impl TypeMap {
    fn new(root: TypeId) -> TypeMap {
        TypeMap {
            root,
            entries: IndexMap::new(),
            aliases: IndexMap::new(),
        }
    }

    /// The type the map was built for.
    pub fn root(&self) -> TypeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, tag: &Discriminator) -> Option<TypeId> {
        self.entries.get(tag).copied()
    }

    /// Resolves a stored tag. Falls back to transformed aliases, then to the
    /// tag's other scalar shape (`"7"` for `7` and vice versa).
    pub fn resolve(&self, tag: &Discriminator) -> Option<TypeId> {
        self.lookup(tag)
            .or_else(|| tag.alternate().and_then(|alt| self.lookup(&alt)))
    }

    /// Resolves a raw cell. Cells that cannot hold a tag resolve to nothing.
    pub fn resolve_value(&self, value: &Value) -> Option<TypeId> {
        Discriminator::from_value(value).and_then(|tag| self.resolve(&tag))
    }

    /// Declared tags, in discovery order.
    pub fn discriminators(&self) -> impl ExactSizeIterator<Item = &Discriminator> + '_ {
        self.entries.keys()
    }

    /// Tags written by discriminator transforms that differ from the
    /// declared tag.
    pub fn aliases(&self) -> impl ExactSizeIterator<Item = &Discriminator> + '_ {
        self.aliases.keys()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Discriminator, TypeId)> + '_ {
        self.entries.iter().map(|(tag, ty)| (tag, *ty))
    }

    fn lookup(&self, tag: &Discriminator) -> Option<TypeId> {
        self.entries
            .get(tag)
            .or_else(|| self.aliases.get(tag))
            .copied()
    }
}

impl Registry {
    /// The type map of `root`'s declared hierarchy.
    ///
    /// Fails with a hierarchy violation when a subclass reachable from
    /// `root` does not extend the type declaring it, or when two different
    /// types claim the same tag (unless legacy precedence is enabled).
    pub fn type_map(&self, root: TypeId) -> Result<Arc<TypeMap>> {
        self.type_maps
            .get_or_init(root, || self.build_type_map(root).map(Arc::new))
            .clone()
    }

    /// Declared discriminator tags of `root`'s hierarchy, in discovery order.
    pub fn types(&self, root: TypeId) -> Result<Vec<Discriminator>> {
        Ok(self.type_map(root)?.discriminators().cloned().collect())
    }

    fn build_type_map(&self, root: TypeId) -> Result<TypeMap> {
        let ty = self.descriptor(root);
        let mut map = TypeMap::new(root);

        if let Some(tag) = ty.discriminator.clone().or_else(|| ty.identity()) {
            let alias = self.stored_alias(root, &tag);
            self.merge_entry(&mut map, &tag, root, Claim::Declared)?;
            if let Some(alias) = alias {
                self.merge_entry(&mut map, &alias, root, Claim::Alias)?;
            }
        }

        // A subclass list naming the declaring type itself was inherited
        // unchanged from a parent; recursing would never terminate.
        if !ty.subclasses.contains(&root) {
            for &subclass in &ty.subclasses {
                if !self.hierarchy().is_subtype(subclass, root) {
                    return Err(Error::hierarchy_violation(format!(
                        "`{}` is declared as a subclass of `{}` but does not extend it",
                        self.descriptor(subclass).name,
                        ty.name
                    )));
                }

                let sub_map = self.type_map(subclass)?;
                self.merge(&mut map, &sub_map)?;
            }
        }

        tracing::debug!(root = %ty.name, entries = map.len(), "built type map");
        Ok(map)
    }

    /// First-write-wins union. A tag mapped to two different types is a
    /// violation unless legacy precedence keeps the earlier entry. Declared
    /// tags and stored aliases share one namespace.
    fn merge(&self, map: &mut TypeMap, other: &TypeMap) -> Result<()> {
        for (tag, ty) in other.iter() {
            self.merge_entry(map, tag, ty, Claim::Declared)?;
        }

        for (tag, &ty) in &other.aliases {
            self.merge_entry(map, tag, ty, Claim::Alias)?;
        }

        Ok(())
    }

    fn merge_entry(
        &self,
        map: &mut TypeMap,
        tag: &Discriminator,
        ty: TypeId,
        claim: Claim,
    ) -> Result<()> {
        match map.lookup(tag) {
            None => {
                let entries = match claim {
                    Claim::Declared => &mut map.entries,
                    Claim::Alias => &mut map.aliases,
                };
                entries.insert(tag.clone(), ty);
            }
            Some(existing) if existing == ty || self.legacy_precedence => {}
            Some(existing) => {
                return Err(Error::hierarchy_violation(format!(
                    "discriminator `{tag}` is claimed by both `{}` and `{}` under `{}`",
                    self.descriptor(existing).name,
                    self.descriptor(ty).name,
                    self.descriptor(map.root).name,
                )));
            }
        }

        Ok(())
    }

    /// The tag a discriminator transform actually writes for `ty`, when it
    /// differs from the declared one.
    fn stored_alias(&self, ty: TypeId, declared: &Discriminator) -> Option<Discriminator> {
        let descriptor = self.descriptor(ty);
        // Only declared tags go through the transform.
        descriptor.discriminator.as_ref()?;
        let transform = descriptor.discriminator_transform?;

        Discriminator::from_value(&transform(declared)).filter(|stored| stored != declared)
    }
}

#[derive(Clone, Copy)]
enum Claim {
    Declared,
    Alias,
}
