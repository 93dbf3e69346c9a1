use super::Registry;
use crate::Model;

use polytable_core::{
    schema::{self, Declaration},
    Result,
};

#[derive(Debug, Default)]
pub struct Builder {
    /// Hierarchy builder
    core: schema::Builder,

    legacy_precedence: bool,

    lazy: bool,
}

impl Builder {
    pub fn register<M: Model>(&mut self) -> &mut Self {
        let declaration = M::declaration();
        debug_assert_eq!(
            declaration.name,
            M::NAME,
            "declaration name must match Model::NAME"
        );
        self.core.declare(declaration);
        self
    }

    pub fn declare(&mut self, declaration: Declaration) -> &mut Self {
        self.core.declare(declaration);
        self
    }

    /// When two different types reachable from the same root claim the same
    /// discriminator, keep the one discovered first instead of failing.
    pub fn legacy_precedence(&mut self, enabled: bool) -> &mut Self {
        self.legacy_precedence = enabled;
        self
    }

    /// Skip computing the caches at build time. Hierarchy violations are
    /// then reported by the first call that needs the offending type map.
    pub fn lazy(&mut self, lazy: bool) -> &mut Self {
        self.lazy = lazy;
        self
    }

    pub fn build(&self) -> Result<Registry> {
        let hierarchy = self.core.build()?;
        let registry = Registry::new(hierarchy, self.legacy_precedence);

        if !self.lazy {
            registry.boot()?;
        }

        Ok(registry)
    }
}
