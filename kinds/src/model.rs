//! Core value model.
//!
//! A [`Value`] is anything the classifier can be handed. Composite values
//! ([`Object`]) delegate to a shared [`TypeDescriptor`], the class-level
//! record that carries the capability markers for a value kind. Descriptors
//! are built once through [`TypeDescriptor::builder`] and shared behind an
//! [`Arc`]; nothing in this module mutates a descriptor after it is built.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// A capability marker a type declares about itself.
///
/// The marker names are the member names looked up on a type descriptor
/// (e.g. `isComplex`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    /// `isBigNumber`: arbitrary-precision numbers.
    BigNumber,
    /// `isComplex`: complex numbers.
    Complex,
    /// `isFraction`: exact rational numbers.
    Fraction,
    /// `isUnit`: quantities with a physical unit.
    Unit,
    /// `isMatrix`: the matrix supertype.
    Matrix,
    /// `isDenseMatrix`: dense refinement of [`Marker::Matrix`].
    DenseMatrix,
    /// `isSparseMatrix`: sparse refinement of [`Marker::Matrix`].
    SparseMatrix,
}

impl Marker {
    /// Every marker, in declaration order.
    pub const ALL: [Marker; 7] = [
        Marker::BigNumber,
        Marker::Complex,
        Marker::Fraction,
        Marker::Unit,
        Marker::Matrix,
        Marker::DenseMatrix,
        Marker::SparseMatrix,
    ];

    /// Markers of which a well-formed type declares at most one.
    pub const EXCLUSIVE: [Marker; 5] = [
        Marker::BigNumber,
        Marker::Complex,
        Marker::Fraction,
        Marker::Unit,
        Marker::Matrix,
    ];

    /// Returns the member name used on a type descriptor.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Marker::BigNumber => "isBigNumber",
            Marker::Complex => "isComplex",
            Marker::Fraction => "isFraction",
            Marker::Unit => "isUnit",
            Marker::Matrix => "isMatrix",
            Marker::DenseMatrix => "isDenseMatrix",
            Marker::SparseMatrix => "isSparseMatrix",
        }
    }

    /// Parses a member name back into a marker.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }

    /// Returns true for the matrix refinements.
    #[must_use]
    pub fn is_refinement(self) -> bool {
        matches!(self, Marker::DenseMatrix | Marker::SparseMatrix)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A boxed primitive: an object wrapper around a primitive value.
#[derive(Debug, Clone, PartialEq)]
pub enum Boxed {
    /// Boxed text.
    Str(String),
    /// Boxed number.
    Number(f64),
    /// Boxed boolean.
    Bool(bool),
}

/// A callable value taking one argument.
#[derive(Clone)]
pub struct NativeFn(Arc<dyn Fn(&Value) -> Value + Send + Sync>);

impl NativeFn {
    /// Wraps a closure.
    pub fn new(f: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invokes the function.
    #[must_use]
    pub fn call(&self, arg: &Value) -> Value {
        (self.0)(arg)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeFn(..)")
    }
}

/// A static predicate attached to a type descriptor (a class-level function
/// such as `Decimal.isDecimal`).
#[derive(Clone)]
pub struct StaticPredicate(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl StaticPredicate {
    /// Wraps a closure.
    pub fn new(f: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Applies the predicate to `value`.
    #[must_use]
    pub fn test(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for StaticPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticPredicate(..)")
    }
}

/// Any value that can be classified.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Primitive boolean.
    Bool(bool),
    /// Primitive number. `NaN` and the infinities are numbers too.
    Number(f64),
    /// Primitive text.
    Str(String),
    /// Boxed primitive.
    Boxed(Boxed),
    /// Native ordered sequence.
    Array(Vec<Value>),
    /// Composite value with an optional type descriptor.
    Object(Object),
    /// Callable value.
    Function(NativeFn),
    /// Point in time as milliseconds since the Unix epoch; `NaN` is an
    /// invalid date.
    Date(f64),
    /// Regular expression.
    RegExp(regex::Regex),
}

impl Value {
    /// Returns the type descriptor one step up this value's delegation chain.
    ///
    /// Only objects have one; a bare object has none.
    #[must_use]
    pub fn descriptor(&self) -> Option<&Arc<TypeDescriptor>> {
        match self {
            Value::Object(obj) => obj.prototype(),
            _ => None,
        }
    }

    /// Returns an own instance property, never consulting the descriptor.
    #[must_use]
    pub fn own_property(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(obj) => obj.own(key),
            _ => None,
        }
    }

    /// Reads a property the way ordinary member access does: the instance
    /// first, then each descriptor up the chain.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(obj) => obj.get(key),
            _ => None,
        }
    }

    /// Returns true if a descriptor named `name` appears anywhere on this
    /// value's delegation chain.
    #[must_use]
    pub fn is_instance_of(&self, name: &str) -> bool {
        self.descriptor()
            .is_some_and(|d| d.name() == name || d.ancestors().any(|a| a.name() == name))
    }

    /// Returns the primitive number, if any.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the primitive text, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the array elements, if any.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the object, if any.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Short name of the representation, used in diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Boxed(_) => "boxed",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
            Value::Date(_) => "date",
            Value::RegExp(_) => "regexp",
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

/// A composite value: own properties plus an optional type descriptor.
#[derive(Debug, Clone)]
pub struct Object {
    prototype: Option<Arc<TypeDescriptor>>,
    properties: BTreeMap<String, Value>,
}

impl Object {
    /// An object literal, delegating to the marker-less `Object` descriptor.
    #[must_use]
    pub fn plain() -> Self {
        Self::with_prototype(TypeDescriptor::object())
    }

    /// An object with no descriptor at all.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            prototype: None,
            properties: BTreeMap::new(),
        }
    }

    /// An instance of the type described by `descriptor`.
    #[must_use]
    pub fn with_prototype(descriptor: Arc<TypeDescriptor>) -> Self {
        Self {
            prototype: Some(descriptor),
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style [`Object::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets an own property, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.properties.insert(key.into(), value.into())
    }

    /// The descriptor this object delegates to.
    #[must_use]
    pub fn prototype(&self) -> Option<&Arc<TypeDescriptor>> {
        self.prototype.as_ref()
    }

    /// Own property lookup.
    #[must_use]
    pub fn own(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    /// Property lookup through the instance and then the descriptor chain.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.own(key)
            .or_else(|| self.prototype.as_ref().and_then(|d| d.member(key)))
    }

    /// Own properties in key order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of own properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True if the object has no own properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// The class-level record a composite value delegates to.
#[derive(Debug)]
pub struct TypeDescriptor {
    name: String,
    comment: String,
    members: BTreeMap<String, Value>,
    statics: BTreeMap<String, StaticPredicate>,
    parent: Option<Arc<TypeDescriptor>>,
}

impl TypeDescriptor {
    /// Name of the shared descriptor behind object literals.
    pub const OBJECT: &'static str = "Object";

    /// Starts building a descriptor named `name`.
    pub fn builder(name: impl Into<String>) -> TypeDescriptorBuilder {
        TypeDescriptorBuilder {
            name: name.into(),
            comment: String::new(),
            members: BTreeMap::new(),
            statics: BTreeMap::new(),
            parent: None,
        }
    }

    /// The shared, marker-less descriptor behind object literals.
    #[must_use]
    pub fn object() -> Arc<TypeDescriptor> {
        static OBJECT: OnceLock<Arc<TypeDescriptor>> = OnceLock::new();
        Arc::clone(OBJECT.get_or_init(|| {
            Arc::new(
                TypeDescriptor::builder(Self::OBJECT)
                    .comment("Descriptor shared by object literals. Declares no markers.")
                    .build(),
            )
        }))
    }

    /// Type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// A member declared by this descriptor itself.
    #[must_use]
    pub fn own_member(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }

    /// A member declared here or inherited from an ancestor.
    #[must_use]
    pub fn member(&self, name: &str) -> Option<&Value> {
        self.own_member(name)
            .or_else(|| self.ancestors().find_map(|a| a.own_member(name)))
    }

    /// Own members in name order.
    pub fn members(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// True if this descriptor itself declares `marker` as boolean `true`.
    #[must_use]
    pub fn declares(&self, marker: Marker) -> bool {
        matches!(self.own_member(marker.as_str()), Some(Value::Bool(true)))
    }

    /// The markers this descriptor itself declares as `true`.
    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        Marker::ALL.into_iter().filter(|m| self.declares(*m))
    }

    /// A static predicate declared by this descriptor itself.
    #[must_use]
    pub fn static_predicate(&self, name: &str) -> Option<&StaticPredicate> {
        self.statics.get(name)
    }

    /// Names of the declared static predicates.
    pub fn statics(&self) -> impl Iterator<Item = &str> {
        self.statics.keys().map(String::as_str)
    }

    /// The next descriptor up the chain.
    #[must_use]
    pub fn parent(&self) -> Option<&Arc<TypeDescriptor>> {
        self.parent.as_ref()
    }

    /// Every ancestor, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &TypeDescriptor> {
        std::iter::successors(self.parent.as_deref(), |d| d.parent.as_deref())
    }
}

/// Builder for [`TypeDescriptor`].
#[derive(Debug)]
pub struct TypeDescriptorBuilder {
    name: String,
    comment: String,
    members: BTreeMap<String, Value>,
    statics: BTreeMap<String, StaticPredicate>,
    parent: Option<Arc<TypeDescriptor>>,
}

impl TypeDescriptorBuilder {
    /// Sets the description.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Declares `marker` as an own member set to `true`.
    #[must_use]
    pub fn marker(self, marker: Marker) -> Self {
        self.member(marker.as_str(), true)
    }

    /// Declares an arbitrary own member.
    #[must_use]
    pub fn member(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.members.insert(name.into(), value.into());
        self
    }

    /// Declares a static predicate.
    #[must_use]
    pub fn static_predicate(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.statics.insert(name.into(), StaticPredicate::new(f));
        self
    }

    /// Sets the parent descriptor.
    #[must_use]
    pub fn parent(mut self, parent: Arc<TypeDescriptor>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Finishes the descriptor.
    #[must_use]
    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            name: self.name,
            comment: self.comment,
            members: self.members,
            statics: self.statics,
            parent: self.parent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_names_round_trip() {
        for marker in Marker::ALL {
            assert_eq!(Marker::from_name(marker.as_str()), Some(marker));
        }
        assert_eq!(Marker::from_name("isString"), None);
    }

    #[test]
    fn member_lookup_walks_parents() {
        let base = Arc::new(TypeDescriptor::builder("Base").member("shape", "square").build());
        let child = TypeDescriptor::builder("Child").parent(base).build();
        assert!(child.own_member("shape").is_none());
        assert!(matches!(child.member("shape"), Some(Value::Str(s)) if s == "square"));
    }

    #[test]
    fn object_get_prefers_own_property() {
        let desc = Arc::new(TypeDescriptor::builder("T").member("k", 1).build());
        let obj = Object::with_prototype(desc).with("k", 2);
        assert_eq!(obj.get("k").and_then(Value::as_number), Some(2.0));
    }

    #[test]
    fn instance_of_follows_chain() {
        let base = Arc::new(TypeDescriptor::builder("Base").build());
        let child = Arc::new(TypeDescriptor::builder("Child").parent(base).build());
        let value = Value::from(Object::with_prototype(child));
        assert!(value.is_instance_of("Child"));
        assert!(value.is_instance_of("Base"));
        assert!(!value.is_instance_of("Other"));
        assert!(!Value::from(Object::bare()).is_instance_of("Object"));
    }

    #[test]
    fn plain_objects_share_the_object_descriptor() {
        let a = Object::plain();
        let b = Object::plain();
        match (a.prototype(), b.prototype()) {
            (Some(x), Some(y)) => assert!(Arc::ptr_eq(x, y)),
            _ => unreachable!("plain objects always carry a descriptor"),
        }
    }
}
