use tracing::debug;
use zilla_ast::MemberExpression;
use zilla_runtime::ValueKind;

use super::Compiler;

impl<'a> Compiler<'a> {
    // =========================================================================
    // Built-in function detection
    // =========================================================================

    /// Canonical symbol for `object.property` when it names a function the
    /// runtime pre-registers on the global object.
    ///
    /// Only applies to `identifier.identifier` access. Every lookup miss means
    /// the shortcut does not apply and the caller emits the generic form. A
    /// program's own declaration of the object name shadows the built-in.
    pub(super) fn builtin_function(&self, member: &MemberExpression) -> Option<&'a str> {
        let object_id = member.object.as_identifier()?;
        let property_id = member.property.as_identifier()?;

        if self.bindings.is_declared(&object_id.name) {
            return None;
        }

        let realm = self.realm;
        let object = realm.global().get_property(&object_id.name).ok()?;
        if object.kind() != ValueKind::Object {
            return None;
        }

        let property = object.as_object()?.get_property(&property_id.name).ok()?;
        if property.kind() != ValueKind::Function {
            return None;
        }

        let symbol = property.as_function()?.func_name();
        debug!(
            object = %object_id.name,
            property = %property_id.name,
            symbol,
            "built-in shortcut"
        );
        Some(symbol)
    }
}
