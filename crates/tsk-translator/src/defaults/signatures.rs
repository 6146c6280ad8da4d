//! Default call-signature overload extraction.
//!
//! Kotlin has no union types, so a parameter typed `A | B` is expanded into
//! one overload per alternative:
//!
//! ```typescript
//! declare function on(target: string | Element, cb: () => void): void;
//! ```
//!
//! ```kotlin
//! fun on(target: String, cb: () -> Unit)
//! fun on(target: Element, cb: () -> Unit)
//! ```
//!
//! When the number of combinations exceeds `max_overload_expansion` the
//! unions are mapped as a whole instead.

use crate::frontend::SignatureExtractor;
use crate::type_scope::TypeScope;
use tsk_common::TranslateResult;
use tsk_model::source::{Parameter, SignatureDecl, SourceType};
use tsk_model::target::{CallSignature, TargetParameter, TargetType};

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultSignatureExtractor;

impl SignatureExtractor for DefaultSignatureExtractor {
    fn call_signature_overloads(
        &self,
        signature: &SignatureDecl,
        scope: &mut TypeScope<'_, '_>,
    ) -> TranslateResult<Vec<CallSignature>> {
        let max_expansion = scope.context().options().max_overload_expansion;
        let (type_parameters, (alternatives, return_type)) =
            scope.with_type_parameters(&signature.type_parameters, |scope| {
                let mut alternatives = Vec::with_capacity(signature.parameters.len());
                for param in &signature.parameters {
                    alternatives.push(parameter_alternatives(param, scope)?);
                }
                if combinations(&alternatives) > max_expansion {
                    alternatives.clear();
                    for param in &signature.parameters {
                        alternatives.push(vec![whole_parameter(param, scope)?]);
                    }
                }
                let return_type = scope.map_type_or_any(signature.return_type.as_ref())?;
                Ok((alternatives, return_type))
            })?;

        Ok(cartesian(&alternatives)
            .into_iter()
            .map(|parameters| CallSignature {
                type_parameters: type_parameters.clone(),
                parameters,
                return_type: return_type.clone(),
            })
            .collect())
    }
}

/// The parameter once per union alternative, or once as a whole.
fn parameter_alternatives(
    param: &Parameter,
    scope: &mut TypeScope<'_, '_>,
) -> TranslateResult<Vec<TargetParameter>> {
    let Some(SourceType::Union { types }) = &param.ty else {
        return Ok(vec![whole_parameter(param, scope)?]);
    };
    if param.rest {
        return Ok(vec![whole_parameter(param, scope)?]);
    }

    let nullable = types.iter().any(SourceType::is_nullish);
    let rest: Vec<&SourceType> = types.iter().filter(|ty| !ty.is_nullish()).collect();
    let all_string_literals = rest
        .iter()
        .all(|ty| matches!(ty, SourceType::StringLiteral { .. }));
    if rest.len() < 2 || all_string_literals {
        return Ok(vec![whole_parameter(param, scope)?]);
    }

    let mut alternatives = Vec::with_capacity(rest.len());
    for alternative in rest {
        let ty = scope.map_type(alternative)?;
        let ty = if nullable { ty.nullable() } else { ty };
        if alternatives
            .iter()
            .any(|existing: &TargetParameter| existing.ty == ty)
        {
            continue;
        }
        alternatives.push(TargetParameter {
            name: param.name.clone(),
            ty,
            optional: param.optional,
            vararg: false,
        });
    }
    Ok(alternatives)
}

fn whole_parameter(
    param: &Parameter,
    scope: &mut TypeScope<'_, '_>,
) -> TranslateResult<TargetParameter> {
    let ty = match (&param.ty, param.rest) {
        (Some(SourceType::Array { element }), true) => scope.map_type(element)?,
        (Some(ty), _) => scope.map_type(ty)?,
        (None, _) => TargetType::nullable_any(),
    };
    Ok(TargetParameter {
        name: param.name.clone(),
        ty,
        optional: param.optional,
        vararg: param.rest,
    })
}

fn combinations(alternatives: &[Vec<TargetParameter>]) -> usize {
    alternatives
        .iter()
        .fold(1usize, |acc, list| acc.saturating_mul(list.len().max(1)))
}

fn cartesian(alternatives: &[Vec<TargetParameter>]) -> Vec<Vec<TargetParameter>> {
    let mut rows: Vec<Vec<TargetParameter>> = vec![Vec::new()];
    for list in alternatives {
        let mut next = Vec::with_capacity(rows.len() * list.len());
        for row in &rows {
            for param in list {
                let mut extended = row.clone();
                extended.push(param.clone());
                next.push(extended);
            }
        }
        rows = next;
    }
    rows
}
