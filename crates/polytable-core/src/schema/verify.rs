use super::{Hierarchy, TypeId};
use crate::{Error, Result};

struct Verify<'a> {
    hierarchy: &'a Hierarchy,
}

impl Hierarchy {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { hierarchy: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        debug_assert!(self.verify_ids_populated());

        self.verify_no_self_parent()?;
        self.verify_parent_chains_terminate()?;
        Ok(())
    }

    fn verify_ids_populated(&self) -> bool {
        for (index, ty) in self.hierarchy.types.iter().enumerate() {
            assert_eq!(ty.id, TypeId(index));
            assert_eq!(self.hierarchy.by_name.get(&ty.name), Some(&ty.id));
        }

        true
    }

    fn verify_no_self_parent(&self) -> Result<()> {
        for ty in &self.hierarchy.types {
            if ty.parent == Some(ty.id) {
                return Err(Error::hierarchy_violation(format!(
                    "type `{}` declares itself as its parent",
                    ty.name
                )));
            }
        }

        Ok(())
    }

    /// A chain longer than the number of types must revisit one of them.
    fn verify_parent_chains_terminate(&self) -> Result<()> {
        let limit = self.hierarchy.types.len();

        for ty in &self.hierarchy.types {
            let mut next = ty.parent;
            let mut steps = 0;

            while let Some(id) = next {
                steps += 1;
                if steps > limit {
                    return Err(Error::hierarchy_violation(format!(
                        "the parent chain of `{}` forms a cycle",
                        ty.name
                    )));
                }
                next = self.hierarchy.types[id.0].parent;
            }
        }

        Ok(())
    }
}
