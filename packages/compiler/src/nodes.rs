//! IR Node Taxonomy
//!
//! The closed set of intermediate-representation nodes produced by the
//! template parser and consumed by the code generator. Nodes are pure data:
//! immutable after construction, structurally comparable, and safe to share
//! read-only across compilation threads. Any transformation (such as macro
//! expansion) builds a new tree rather than mutating in place.

use crate::parse_util::ParseLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Expression payload of value-bearing nodes.
///
/// Carries the raw expression source together with the position the parser
/// recorded for it. The position is diagnostic metadata only; it takes no
/// part in the node's semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub source: String,
    pub location: ParseLocation,
}

impl Expression {
    pub fn new(source: impl Into<String>, location: ParseLocation) -> Self {
        Expression {
            source: source.into(),
            location,
        }
    }
}

/// Module compilation unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    pub program: Box<Node>,
}

impl Module {
    pub fn new(name: impl Into<String>, program: Node) -> Self {
        Module {
            name: name.into(),
            program: Box::new(program),
        }
    }
}

/// Template program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    pub body: Box<Node>,
}

impl Program {
    pub fn new(name: impl Into<String>, body: Node) -> Self {
        Program {
            name: name.into(),
            body: Box::new(body),
        }
    }
}

/// Macro definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Macro {
    pub name: String,
    pub body: Box<Node>,
}

impl Macro {
    pub fn new(name: impl Into<String>, body: Node) -> Self {
        Macro {
            name: name.into(),
            body: Box::new(body),
        }
    }
}

/// Element sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    pub items: Vec<Node>,
}

impl Sequence {
    pub fn new(items: Vec<Node>) -> Self {
        Sequence { items }
    }

    /// A sequence is empty iff its item list is empty. This is the only
    /// sanctioned emptiness test; consumers must not invent their own.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// XML element: start tag, optional end tag, content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub start: Box<Node>,
    pub end: Option<Box<Node>>,
    pub content: Box<Node>,
}

impl Element {
    pub fn new(start: Node, end: Option<Node>, content: Node) -> Self {
        Element {
            start: Box::new(start),
            end: end.map(Box::new),
            content: Box::new(content),
        }
    }
}

/// Start-tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Start {
    pub name: String,
    pub prefix: String,
    pub suffix: String,
    pub attributes: Vec<Node>,
}

impl Start {
    pub fn new(
        name: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        attributes: Vec<Node>,
    ) -> Self {
        Start {
            name: name.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
            attributes,
        }
    }
}

/// End-tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct End {
    pub name: String,
    pub space: String,
    pub prefix: String,
    pub suffix: String,
}

impl End {
    pub fn new(
        name: impl Into<String>,
        space: impl Into<String>,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        End {
            name: name.into(),
            space: space.into(),
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }
}

/// Static text output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    pub value: String,
}

impl Text {
    pub fn new(value: impl Into<String>) -> Self {
        Text {
            value: value.into(),
        }
    }
}

/// Evaluation context boundary around a subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    pub node: Box<Node>,
}

impl Context {
    pub fn new(node: Node) -> Self {
        Context {
            node: Box::new(node),
        }
    }
}

/// Inline code block emitted verbatim into the compiled program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub source: String,
}

impl CodeBlock {
    pub fn new(source: impl Into<String>) -> Self {
        CodeBlock {
            source: source.into(),
        }
    }
}

/// Expression object value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub value: Expression,
    pub default: Option<Box<Node>>,
    pub default_marker: Option<String>,
}

impl Value {
    pub fn new(value: Expression) -> Self {
        Value {
            value,
            default: None,
            default_marker: None,
        }
    }

    pub fn with_default(mut self, default: Node, marker: impl Into<String>) -> Self {
        self.default = Some(Box::new(default));
        self.default_marker = Some(marker.into());
        self
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Value {:?} ({})>",
            self.value.source, self.value.location
        )
    }
}

/// Expression value for text substitution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    pub value: Expression,
    pub char_escape: Vec<char>,
    pub default: Option<Box<Node>>,
    pub default_marker: Option<String>,
    pub literal_false: bool,
}

impl Substitution {
    pub fn new(value: Expression, char_escape: Vec<char>) -> Self {
        Substitution {
            value,
            char_escape,
            default: None,
            default_marker: None,
            literal_false: true,
        }
    }
}

/// Boolean-valued attribute expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boolean {
    pub value: Expression,
    pub s: String,
    pub default: Option<Box<Node>>,
    pub default_marker: Option<String>,
}

impl Boolean {
    pub fn new(value: Expression, s: impl Into<String>) -> Self {
        Boolean {
            value,
            s: s.into(),
            default: None,
            default_marker: None,
        }
    }
}

/// Content substitution, optionally routed through translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub expression: Box<Node>,
    pub char_escape: Vec<char>,
    pub translate: bool,
}

impl Content {
    pub fn new(expression: Node, char_escape: Vec<char>, translate: bool) -> Self {
        Content {
            expression: Box::new(expression),
            char_escape,
            translate,
        }
    }
}

/// String interpolation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpolation {
    pub value: Expression,
    pub braces_required: bool,
    pub translation: bool,
    pub default: Option<Box<Node>>,
    pub default_marker: Option<String>,
}

impl Interpolation {
    pub fn new(value: Expression, braces_required: bool, translation: bool) -> Self {
        Interpolation {
            value,
            braces_required,
            translation,
            default: None,
            default_marker: None,
        }
    }
}

/// Replace a non-empty value with a fixed string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replace {
    pub value: Box<Node>,
    pub s: String,
}

impl Replace {
    pub fn new(value: Node, s: impl Into<String>) -> Self {
        Replace {
            value: Box::new(value),
            s: s.into(),
        }
    }
}

/// Wraps an expression with a negation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Negate {
    pub value: Box<Node>,
}

impl Negate {
    pub fn new(value: Node) -> Self {
        Negate {
            value: Box::new(value),
        }
    }
}

/// Binary comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinOp {
    pub left: Box<Node>,
    pub op: Box<Node>,
    pub right: Box<Node>,
}

impl BinOp {
    pub fn new(left: Node, op: Node, right: Node) -> Self {
        BinOp {
            left: Box::new(left),
            op: Box::new(op),
            right: Box::new(right),
        }
    }
}

/// Object identity operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Is;

/// Negated object identity operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsNot;

/// Object equality operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equals;

/// Logical conjunction: all terms must be met.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct And {
    pub expressions: Vec<Node>,
}

impl And {
    pub fn new(expressions: Vec<Node>) -> Self {
        And { expressions }
    }
}

/// Logical disjunction: at least one term must be met.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Or {
    pub expressions: Vec<Node>,
}

impl Or {
    pub fn new(expressions: Vec<Node>) -> Self {
        Or { expressions }
    }
}

/// Node visited only if the condition holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub expression: Box<Node>,
    pub node: Box<Node>,
    pub orelse: Option<Box<Node>>,
}

impl Condition {
    pub fn new(expression: Node, node: Node, orelse: Option<Node>) -> Self {
        Condition {
            expression: Box::new(expression),
            node: Box::new(node),
            orelse: orelse.map(Box::new),
        }
    }
}

/// Variable definitions in scope around a subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Define {
    pub assignments: Vec<Node>,
    pub node: Box<Node>,
}

impl Define {
    pub fn new(assignments: Vec<Node>, node: Node) -> Self {
        Define {
            assignments,
            node: Box::new(node),
        }
    }
}

/// Variable assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub names: Vec<String>,
    pub expression: Box<Node>,
    pub local: bool,
}

impl Assignment {
    pub fn new(names: Vec<String>, expression: Node, local: bool) -> Self {
        Assignment {
            names,
            expression: Box::new(expression),
            local,
        }
    }
}

/// Alias assignment.
///
/// The aliased expression should be a cached or global value; aliases are
/// never local.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    pub names: Vec<String>,
    pub expression: Box<Node>,
}

impl Alias {
    pub fn new(names: Vec<String>, expression: Node) -> Self {
        Alias {
            names,
            expression: Box::new(expression),
        }
    }

    pub fn local(&self) -> bool {
        false
    }
}

/// Iterate over the assignment and repeat the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repeat {
    pub names: Vec<String>,
    pub expression: Box<Node>,
    pub local: bool,
    pub whitespace: String,
    pub node: Box<Node>,
}

impl Repeat {
    pub fn new(
        names: Vec<String>,
        expression: Node,
        local: bool,
        whitespace: impl Into<String>,
        node: Node,
    ) -> Self {
        Repeat {
            names,
            expression: Box::new(expression),
            local,
            whitespace: whitespace.into(),
            node: Box::new(node),
        }
    }
}

/// Evaluate the expressions only once inside the wrapped subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cache {
    pub expressions: Vec<Node>,
    pub node: Box<Node>,
}

impl Cache {
    pub fn new(expressions: Vec<Node>, node: Node) -> Self {
        Cache {
            expressions,
            node: Box::new(node),
        }
    }
}

/// Cancel previously cached expressions, rebinding them to a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cancel {
    pub expressions: Vec<Node>,
    pub node: Box<Node>,
    pub value: Box<Node>,
}

impl Cancel {
    pub fn new(expressions: Vec<Node>, node: Node, value: Node) -> Self {
        Cancel {
            expressions,
            node: Box::new(node),
            value: Box::new(value),
        }
    }
}

/// Copy the value of an expression verbatim into the output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Copy {
    pub expression: Box<Node>,
}

impl Copy {
    pub fn new(expression: Node) -> Self {
        Copy {
            expression: Box::new(expression),
        }
    }
}

/// Error handler around a subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnError {
    pub fallback: Box<Node>,
    pub name: String,
    pub node: Box<Node>,
}

impl OnError {
    pub fn new(fallback: Node, name: impl Into<String>, node: Node) -> Self {
        OnError {
            fallback: Box::new(fallback),
            name: name.into(),
            node: Box::new(node),
        }
    }
}

/// Element attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub expression: Box<Node>,
    pub quote: String,
    pub eq: String,
    pub space: String,
    pub default: Option<String>,
    pub filters: Vec<String>,
}

impl Attribute {
    pub fn new(
        name: impl Into<String>,
        expression: Node,
        quote: impl Into<String>,
        eq: impl Into<String>,
        space: impl Into<String>,
        default: Option<String>,
        filters: Vec<String>,
    ) -> Self {
        Attribute {
            name: name.into(),
            expression: Box::new(expression),
            quote: quote.into(),
            eq: eq.into(),
            space: space.into(),
            default,
            filters,
        }
    }
}

/// Element attributes computed from one or more dictionaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictAttributes {
    pub expression: Box<Node>,
    pub char_escape: Vec<char>,
    pub quote: String,
    pub exclude: Vec<String>,
    pub bool_names: Vec<String>,
}

impl DictAttributes {
    pub fn new(
        expression: Node,
        char_escape: Vec<char>,
        quote: impl Into<String>,
        exclude: Vec<String>,
        bool_names: Vec<String>,
    ) -> Self {
        DictAttributes {
            expression: Box::new(expression),
            char_escape,
            quote: quote.into(),
            exclude,
            bool_names,
        }
    }
}

/// Extend an externally defined macro.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseExternalMacro {
    pub expression: Box<Node>,
    pub slots: Vec<Node>,
    pub extend: bool,
}

impl UseExternalMacro {
    pub fn new(expression: Node, slots: Vec<Node>, extend: bool) -> Self {
        UseExternalMacro {
            expression: Box::new(expression),
            slots,
            extend,
        }
    }
}

/// Use a macro defined inside the same program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseInternalMacro {
    pub name: String,
}

impl UseInternalMacro {
    pub fn new(name: impl Into<String>) -> Self {
        UseInternalMacro { name: name.into() }
    }
}

/// Fill a macro slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillSlot {
    pub name: String,
    pub node: Box<Node>,
}

impl FillSlot {
    pub fn new(name: impl Into<String>, node: Node) -> Self {
        FillSlot {
            name: name.into(),
            node: Box::new(node),
        }
    }
}

/// Define a macro slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefineSlot {
    pub name: String,
    pub node: Box<Node>,
}

impl DefineSlot {
    pub fn new(name: impl Into<String>, node: Node) -> Self {
        DefineSlot {
            name: name.into(),
            node: Box::new(node),
        }
    }
}

/// Mark a subtree for translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translate {
    pub msgid: Option<String>,
    pub node: Box<Node>,
}

impl Translate {
    pub fn new(msgid: Option<String>, node: Node) -> Self {
        Translate {
            msgid,
            node: Box::new(node),
        }
    }
}

/// Name a translated subtree for use as a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationName {
    pub name: String,
    pub node: Box<Node>,
}

impl TranslationName {
    pub fn new(name: impl Into<String>, node: Node) -> Self {
        TranslationName {
            name: name.into(),
            node: Box::new(node),
        }
    }
}

/// Update the translation domain for a subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationDomain {
    pub name: String,
    pub node: Box<Node>,
}

impl TranslationDomain {
    pub fn new(name: impl Into<String>, node: Node) -> Self {
        TranslationDomain {
            name: name.into(),
            node: Box::new(node),
        }
    }
}

/// Update the translation target language for a subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationTarget {
    pub expression: Box<Node>,
    pub node: Box<Node>,
}

impl TranslationTarget {
    pub fn new(expression: Node, node: Node) -> Self {
        TranslationTarget {
            expression: Box::new(expression),
            node: Box::new(node),
        }
    }
}

/// Update the translation context for a subtree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationContext {
    pub name: String,
    pub node: Box<Node>,
}

impl TranslationContext {
    pub fn new(name: impl Into<String>, node: Node) -> Self {
        TranslationContext {
            name: name.into(),
            node: Box::new(node),
        }
    }
}

/// Enum over every IR node variant.
///
/// The variant set is closed; the code generator dispatches exhaustively
/// through [`Visitor`], so adding a variant is a build-time event for every
/// consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Module(Module),
    Program(Program),
    Macro(Macro),
    Sequence(Sequence),
    Element(Element),
    Start(Start),
    End(End),
    Text(Text),
    Context(Context),
    CodeBlock(CodeBlock),
    Value(Value),
    Substitution(Substitution),
    Boolean(Boolean),
    Content(Content),
    Interpolation(Interpolation),
    Replace(Replace),
    Negate(Negate),
    BinOp(BinOp),
    Is(Is),
    IsNot(IsNot),
    Equals(Equals),
    And(And),
    Or(Or),
    Condition(Condition),
    Define(Define),
    Assignment(Assignment),
    Alias(Alias),
    Repeat(Repeat),
    Cache(Cache),
    Cancel(Cancel),
    Copy(Copy),
    OnError(OnError),
    Attribute(Attribute),
    DictAttributes(DictAttributes),
    UseExternalMacro(UseExternalMacro),
    UseInternalMacro(UseInternalMacro),
    FillSlot(FillSlot),
    DefineSlot(DefineSlot),
    Translate(Translate),
    TranslationName(TranslationName),
    TranslationDomain(TranslationDomain),
    TranslationTarget(TranslationTarget),
    TranslationContext(TranslationContext),
}

impl Node {
    /// The variant tag name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Module(_) => "Module",
            Node::Program(_) => "Program",
            Node::Macro(_) => "Macro",
            Node::Sequence(_) => "Sequence",
            Node::Element(_) => "Element",
            Node::Start(_) => "Start",
            Node::End(_) => "End",
            Node::Text(_) => "Text",
            Node::Context(_) => "Context",
            Node::CodeBlock(_) => "CodeBlock",
            Node::Value(_) => "Value",
            Node::Substitution(_) => "Substitution",
            Node::Boolean(_) => "Boolean",
            Node::Content(_) => "Content",
            Node::Interpolation(_) => "Interpolation",
            Node::Replace(_) => "Replace",
            Node::Negate(_) => "Negate",
            Node::BinOp(_) => "BinOp",
            Node::Is(_) => "Is",
            Node::IsNot(_) => "IsNot",
            Node::Equals(_) => "Equals",
            Node::And(_) => "And",
            Node::Or(_) => "Or",
            Node::Condition(_) => "Condition",
            Node::Define(_) => "Define",
            Node::Assignment(_) => "Assignment",
            Node::Alias(_) => "Alias",
            Node::Repeat(_) => "Repeat",
            Node::Cache(_) => "Cache",
            Node::Cancel(_) => "Cancel",
            Node::Copy(_) => "Copy",
            Node::OnError(_) => "OnError",
            Node::Attribute(_) => "Attribute",
            Node::DictAttributes(_) => "DictAttributes",
            Node::UseExternalMacro(_) => "UseExternalMacro",
            Node::UseInternalMacro(_) => "UseInternalMacro",
            Node::FillSlot(_) => "FillSlot",
            Node::DefineSlot(_) => "DefineSlot",
            Node::Translate(_) => "Translate",
            Node::TranslationName(_) => "TranslationName",
            Node::TranslationDomain(_) => "TranslationDomain",
            Node::TranslationTarget(_) => "TranslationTarget",
            Node::TranslationContext(_) => "TranslationContext",
        }
    }

    /// Dispatches to the visitor method for this variant.
    pub fn visit<V: Visitor>(&self, visitor: &mut V) -> V::Result {
        match self {
            Node::Module(n) => visitor.visit_module(n),
            Node::Program(n) => visitor.visit_program(n),
            Node::Macro(n) => visitor.visit_macro(n),
            Node::Sequence(n) => visitor.visit_sequence(n),
            Node::Element(n) => visitor.visit_element(n),
            Node::Start(n) => visitor.visit_start(n),
            Node::End(n) => visitor.visit_end(n),
            Node::Text(n) => visitor.visit_text(n),
            Node::Context(n) => visitor.visit_context(n),
            Node::CodeBlock(n) => visitor.visit_code_block(n),
            Node::Value(n) => visitor.visit_value(n),
            Node::Substitution(n) => visitor.visit_substitution(n),
            Node::Boolean(n) => visitor.visit_boolean(n),
            Node::Content(n) => visitor.visit_content(n),
            Node::Interpolation(n) => visitor.visit_interpolation(n),
            Node::Replace(n) => visitor.visit_replace(n),
            Node::Negate(n) => visitor.visit_negate(n),
            Node::BinOp(n) => visitor.visit_bin_op(n),
            Node::Is(n) => visitor.visit_is(n),
            Node::IsNot(n) => visitor.visit_is_not(n),
            Node::Equals(n) => visitor.visit_equals(n),
            Node::And(n) => visitor.visit_and(n),
            Node::Or(n) => visitor.visit_or(n),
            Node::Condition(n) => visitor.visit_condition(n),
            Node::Define(n) => visitor.visit_define(n),
            Node::Assignment(n) => visitor.visit_assignment(n),
            Node::Alias(n) => visitor.visit_alias(n),
            Node::Repeat(n) => visitor.visit_repeat(n),
            Node::Cache(n) => visitor.visit_cache(n),
            Node::Cancel(n) => visitor.visit_cancel(n),
            Node::Copy(n) => visitor.visit_copy(n),
            Node::OnError(n) => visitor.visit_on_error(n),
            Node::Attribute(n) => visitor.visit_attribute(n),
            Node::DictAttributes(n) => visitor.visit_dict_attributes(n),
            Node::UseExternalMacro(n) => visitor.visit_use_external_macro(n),
            Node::UseInternalMacro(n) => visitor.visit_use_internal_macro(n),
            Node::FillSlot(n) => visitor.visit_fill_slot(n),
            Node::DefineSlot(n) => visitor.visit_define_slot(n),
            Node::Translate(n) => visitor.visit_translate(n),
            Node::TranslationName(n) => visitor.visit_translation_name(n),
            Node::TranslationDomain(n) => visitor.visit_translation_domain(n),
            Node::TranslationTarget(n) => visitor.visit_translation_target(n),
            Node::TranslationContext(n) => visitor.visit_translation_context(n),
        }
    }
}

/// Exhaustive visitor over the node taxonomy.
///
/// Every variant has its own method with no default body, so a consumer that
/// misses one fails to build.
pub trait Visitor {
    type Result;

    fn visit_module(&mut self, node: &Module) -> Self::Result;
    fn visit_program(&mut self, node: &Program) -> Self::Result;
    fn visit_macro(&mut self, node: &Macro) -> Self::Result;
    fn visit_sequence(&mut self, node: &Sequence) -> Self::Result;
    fn visit_element(&mut self, node: &Element) -> Self::Result;
    fn visit_start(&mut self, node: &Start) -> Self::Result;
    fn visit_end(&mut self, node: &End) -> Self::Result;
    fn visit_text(&mut self, node: &Text) -> Self::Result;
    fn visit_context(&mut self, node: &Context) -> Self::Result;
    fn visit_code_block(&mut self, node: &CodeBlock) -> Self::Result;
    fn visit_value(&mut self, node: &Value) -> Self::Result;
    fn visit_substitution(&mut self, node: &Substitution) -> Self::Result;
    fn visit_boolean(&mut self, node: &Boolean) -> Self::Result;
    fn visit_content(&mut self, node: &Content) -> Self::Result;
    fn visit_interpolation(&mut self, node: &Interpolation) -> Self::Result;
    fn visit_replace(&mut self, node: &Replace) -> Self::Result;
    fn visit_negate(&mut self, node: &Negate) -> Self::Result;
    fn visit_bin_op(&mut self, node: &BinOp) -> Self::Result;
    fn visit_is(&mut self, node: &Is) -> Self::Result;
    fn visit_is_not(&mut self, node: &IsNot) -> Self::Result;
    fn visit_equals(&mut self, node: &Equals) -> Self::Result;
    fn visit_and(&mut self, node: &And) -> Self::Result;
    fn visit_or(&mut self, node: &Or) -> Self::Result;
    fn visit_condition(&mut self, node: &Condition) -> Self::Result;
    fn visit_define(&mut self, node: &Define) -> Self::Result;
    fn visit_assignment(&mut self, node: &Assignment) -> Self::Result;
    fn visit_alias(&mut self, node: &Alias) -> Self::Result;
    fn visit_repeat(&mut self, node: &Repeat) -> Self::Result;
    fn visit_cache(&mut self, node: &Cache) -> Self::Result;
    fn visit_cancel(&mut self, node: &Cancel) -> Self::Result;
    fn visit_copy(&mut self, node: &Copy) -> Self::Result;
    fn visit_on_error(&mut self, node: &OnError) -> Self::Result;
    fn visit_attribute(&mut self, node: &Attribute) -> Self::Result;
    fn visit_dict_attributes(&mut self, node: &DictAttributes) -> Self::Result;
    fn visit_use_external_macro(&mut self, node: &UseExternalMacro) -> Self::Result;
    fn visit_use_internal_macro(&mut self, node: &UseInternalMacro) -> Self::Result;
    fn visit_fill_slot(&mut self, node: &FillSlot) -> Self::Result;
    fn visit_define_slot(&mut self, node: &DefineSlot) -> Self::Result;
    fn visit_translate(&mut self, node: &Translate) -> Self::Result;
    fn visit_translation_name(&mut self, node: &TranslationName) -> Self::Result;
    fn visit_translation_domain(&mut self, node: &TranslationDomain) -> Self::Result;
    fn visit_translation_target(&mut self, node: &TranslationTarget) -> Self::Result;
    fn visit_translation_context(&mut self, node: &TranslationContext) -> Self::Result;
}
