//! Default TypeScript-to-Kotlin type mapping.
//!
//! | TypeScript | Kotlin |
//! |------------|--------|
//! | `number` | `Number` |
//! | `string`, string literal | `String` |
//! | `boolean` | `Boolean` |
//! | `void` | `Unit` |
//! | `any`, `unknown` | `Any?` |
//! | `null`, `undefined` | `Nothing?` |
//! | `never` | `Nothing` |
//! | `T[]` | `Array<T>` |
//! | `T \| null` | `T?` |
//! | other unions, intersections | `Any` |
//! | `(x: A) => R` | `(A) -> R` |
//! | `{ ... }` | synthesized interface |

use crate::frontend::TypeMapper;
use crate::type_scope::TypeScope;
use tsk_common::{TranslateError, TranslateResult};
use tsk_model::source::{KeywordType, SignatureDecl, SourceType};
use tsk_model::target::TargetType;

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTypeMapper;

impl TypeMapper for DefaultTypeMapper {
    fn map_type(
        &self,
        ty: &SourceType,
        scope: &mut TypeScope<'_, '_>,
    ) -> TranslateResult<TargetType> {
        match ty {
            SourceType::Keyword { keyword } => Ok(map_keyword(*keyword)),
            SourceType::Reference {
                name,
                type_arguments,
            } => {
                if name == "Object" && type_arguments.is_empty() {
                    return Ok(TargetType::any());
                }
                let arguments = type_arguments
                    .iter()
                    .map(|arg| scope.map_type(arg))
                    .collect::<TranslateResult<Vec<_>>>()?;
                Ok(TargetType::generic(name.clone(), arguments))
            }
            SourceType::Array { element } => {
                let element = scope.map_type(element)?;
                Ok(TargetType::generic("Array", vec![element]))
            }
            SourceType::Tuple { .. } => Ok(TargetType::generic(
                "Array",
                vec![TargetType::nullable_any()],
            )),
            SourceType::Union { types } => map_union(types, scope),
            SourceType::Intersection { .. } => Ok(TargetType::any()),
            SourceType::Function { signature } => map_function_type(signature, scope),
            SourceType::TypeLiteral { id, members } => scope.structural_type(*id, members),
            SourceType::StringLiteral { .. } => Ok(TargetType::string()),
            SourceType::NumberLiteral { .. } => Ok(TargetType::named("Number")),
            SourceType::BooleanLiteral { .. } => Ok(TargetType::named("Boolean")),
            SourceType::Other { id, kind } => Err(TranslateError::unsupported(
                Some(*id),
                kind.clone(),
                format!("no Kotlin mapping for `{kind}` types"),
            )),
        }
    }
}

fn map_keyword(keyword: KeywordType) -> TargetType {
    match keyword {
        KeywordType::Any | KeywordType::Unknown => TargetType::nullable_any(),
        KeywordType::Number => TargetType::named("Number"),
        KeywordType::String => TargetType::string(),
        KeywordType::Boolean => TargetType::named("Boolean"),
        KeywordType::Void => TargetType::unit(),
        KeywordType::Null | KeywordType::Undefined => TargetType::named("Nothing").nullable(),
        KeywordType::Never => TargetType::named("Nothing"),
        KeywordType::BigInt | KeywordType::Symbol | KeywordType::Object => TargetType::any(),
    }
}

/// `T | null | undefined` becomes `T?`; string-literal unions become
/// `String`; anything else collapses to `Any`.
fn map_union(types: &[SourceType], scope: &mut TypeScope<'_, '_>) -> TranslateResult<TargetType> {
    let nullable = types.iter().any(SourceType::is_nullish);
    let rest: Vec<&SourceType> = types.iter().filter(|ty| !ty.is_nullish()).collect();

    let mapped = match rest.as_slice() {
        [] => return Ok(TargetType::named("Nothing").nullable()),
        [single] => scope.map_type(single)?,
        many if many
            .iter()
            .all(|ty| matches!(ty, SourceType::StringLiteral { .. })) =>
        {
            TargetType::string()
        }
        _ => TargetType::any(),
    };
    Ok(if nullable { mapped.nullable() } else { mapped })
}

fn map_function_type(
    signature: &SignatureDecl,
    scope: &mut TypeScope<'_, '_>,
) -> TranslateResult<TargetType> {
    let (_, (parameters, return_type)) =
        scope.with_type_parameters(&signature.type_parameters, |scope| {
            let mut parameters = Vec::with_capacity(signature.parameters.len());
            for param in &signature.parameters {
                let ty = scope.map_type_or_any(param.ty.as_ref())?;
                parameters.push(if param.optional { ty.nullable() } else { ty });
            }
            let return_type = match &signature.return_type {
                Some(ty) => scope.map_type(ty)?,
                None => TargetType::unit(),
            };
            Ok((parameters, return_type))
        })?;
    Ok(TargetType::Function {
        parameters,
        return_type: Box::new(return_type),
        nullable: false,
    })
}
