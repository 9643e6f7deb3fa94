//! Scope graph data model.

use sift_core::types::collections::FxHashMap;
use sift_core::types::span::ByteSpan;
use smallvec::SmallVec;

use crate::scanner::Language;
use crate::tree::NodeId;

/// Index of a scope within its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(pub(crate) u32);

impl ScopeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a symbol within its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub(crate) u32);

impl SymbolId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Module,
    Function,
    Class,
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Variable,
    Parameter,
    Function,
    Class,
    Import,
}

impl SymbolKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Variable => "variable",
            Self::Parameter => "parameter",
            Self::Function => "function",
            Self::Class => "class",
            Self::Import => "import",
        }
    }
}

/// One declaration: name, kind, declaring scope, span of the declaring token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub scope: ScopeId,
    pub span: ByteSpan,
    pub node: NodeId,
}

/// One lexical scope. Symbol insertion order is declaration order; later
/// declarations of a name shadow earlier ones within the same scope.
#[derive(Debug)]
pub struct Scope {
    pub id: ScopeId,
    pub parent: Option<ScopeId>,
    pub kind: ScopeKind,
    pub span: ByteSpan,
    /// name → declarations of that name in this scope, in source order.
    by_name: FxHashMap<String, SmallVec<[SymbolId; 2]>>,
    /// All declarations in this scope, in source order.
    declared: Vec<SymbolId>,
}

/// One raw import statement, kept for the project graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRecord {
    /// Module specifier as written (quotes stripped).
    pub module: String,
    /// Imported symbol name; `None` for whole-module or wildcard imports.
    pub symbol: Option<String>,
    /// Local alias, if any.
    pub alias: Option<String>,
    /// True for `import *` style wildcards.
    pub wildcard: bool,
    pub span: ByteSpan,
}

/// All scopes and symbols for one file.
///
/// Built once per analysis pass that requires it, immutable thereafter.
#[derive(Debug)]
pub struct ScopeGraph {
    language: Language,
    scopes: Vec<Scope>,
    symbols: Vec<Symbol>,
    imports: Vec<ImportRecord>,
}

impl ScopeGraph {
    pub(crate) fn new(language: Language) -> Self {
        Self {
            language,
            scopes: Vec::new(),
            symbols: Vec::new(),
            imports: Vec::new(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The file-level scope — root of the parent chain.
    pub fn module_scope(&self) -> ScopeId {
        ScopeId(0)
    }

    pub fn get_scope(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Symbols declared directly in `scope`, in declaration order.
    pub fn symbols_in_scope(&self, scope: ScopeId) -> impl Iterator<Item = &Symbol> {
        self.scopes[scope.index()]
            .declared
            .iter()
            .map(move |&id| &self.symbols[id.index()])
    }

    /// Declarations of `name` directly in `scope`, in declaration order.
    pub fn declarations_of(&self, scope: ScopeId, name: &str) -> &[SymbolId] {
        self.scopes[scope.index()]
            .by_name
            .get(name)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Every symbol in the file, in declaration order.
    pub fn iter_symbols(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> {
        self.symbols
            .iter()
            .enumerate()
            .map(|(i, s)| (SymbolId(i as u32), s))
    }

    pub fn iter_scopes(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.iter()
    }

    /// Raw import statements, in source order.
    pub fn imports(&self) -> &[ImportRecord] {
        &self.imports
    }

    // ---- builder-side mutation, sealed after build ----

    pub(crate) fn push_scope(
        &mut self,
        parent: Option<ScopeId>,
        kind: ScopeKind,
        span: ByteSpan,
    ) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope {
            id,
            parent,
            kind,
            span,
            by_name: FxHashMap::default(),
            declared: Vec::new(),
        });
        id
    }

    pub(crate) fn push_symbol(&mut self, symbol: Symbol) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        let scope = &mut self.scopes[symbol.scope.index()];
        scope
            .by_name
            .entry(symbol.name.clone())
            .or_default()
            .push(id);
        scope.declared.push(id);
        self.symbols.push(symbol);
        id
    }

    pub(crate) fn push_import(&mut self, record: ImportRecord) {
        self.imports.push(record);
    }
}
