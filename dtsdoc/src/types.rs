//! Type normalizer: syntax-tree type expressions → [`TypeDescriptor`].

use crate::error::{ExtractError, Result};
use crate::model::{ObjectMember, Param, TypeDescriptor};
use crate::scope::TypeScope;
use dtsdoc_syntax::{InterfaceMember, Parameter, SyntaxKind, TypeNode, TypeParameter};

/// Normalize one type expression in the given type-parameter scope.
pub fn normalize(node: &TypeNode, scope: &TypeScope<'_>) -> Result<TypeDescriptor> {
    match node {
        TypeNode::Keyword(keyword) => match keyword.kind {
            SyntaxKind::AnyKeyword => Ok(TypeDescriptor::Any),
            SyntaxKind::BooleanKeyword => Ok(TypeDescriptor::Boolean),
            SyntaxKind::NumberKeyword => Ok(TypeDescriptor::Number),
            SyntaxKind::StringKeyword => Ok(TypeDescriptor::String),
            other => Err(ExtractError::unrecognized(other)),
        },
        TypeNode::Object(object) => {
            let members = object
                .members
                .iter()
                .map(|member| object_member(member, scope))
                .collect::<Result<Vec<_>>>()?;
            Ok(TypeDescriptor::ObjectType { members })
        }
        TypeNode::Array(element) => Ok(TypeDescriptor::ArrayOf {
            element: Box::new(normalize(element, scope)?),
        }),
        TypeNode::Function(function) => {
            let names = type_param_names(&function.type_params)?;
            let inner = scope.push(names);
            Ok(TypeDescriptor::FunctionType {
                params: params(&function.params, &inner)?,
                returns: Box::new(normalize(&function.return_type, &inner)?),
            })
        }
        TypeNode::Identifier(ident) => {
            if scope.contains(&ident.text) {
                Ok(TypeDescriptor::param(ident.text.as_str()))
            } else {
                Ok(TypeDescriptor::named(ident.text.as_str()))
            }
        }
        TypeNode::Generic(generic) => {
            let args = generic
                .args
                .iter()
                .map(|arg| normalize(arg, scope))
                .collect::<Result<Vec<_>>>()?;
            Ok(TypeDescriptor::NamedType {
                name: generic.name.text.clone(),
                qualifier: None,
                type_args: Some(args),
            })
        }
        TypeNode::Qualified(qualified) => {
            let mut right = normalize(&qualified.right, scope)?;
            match &mut right {
                TypeDescriptor::NamedType { qualifier, .. } => {
                    qualifier
                        .get_or_insert_with(Vec::new)
                        .insert(0, qualified.left.text.clone());
                    Ok(right)
                }
                // `A.T` where `T` is a type parameter is still a path.
                TypeDescriptor::TypeParamRef { name } => Ok(TypeDescriptor::NamedType {
                    name: std::mem::take(name),
                    qualifier: Some(vec![qualified.left.text.clone()]),
                    type_args: None,
                }),
                _ => Err(ExtractError::unrecognized(qualified.right.kind())),
            }
        }
        TypeNode::Union(_)
        | TypeNode::Tuple(_)
        | TypeNode::Parenthesized(_)
        | TypeNode::StringLiteral(_)
        | TypeNode::Query(_) => Err(ExtractError::unrecognized(node.kind())),
    }
}

fn object_member(member: &InterfaceMember, scope: &TypeScope<'_>) -> Result<ObjectMember> {
    match member {
        InterfaceMember::Index(index) => Ok(ObjectMember::index(
            params(&index.params, scope)?,
            normalize(&index.type_annotation, scope)?,
        )),
        InterfaceMember::Property(property) => {
            if property.question {
                return Err(ExtractError::unsupported(format!(
                    "optional property `{}`",
                    property.name.text
                )));
            }
            let ty = match &property.type_annotation {
                Some(ty) => normalize(ty, scope)?,
                None => TypeDescriptor::Any,
            };
            Ok(ObjectMember::Property {
                name: property.name.text.clone(),
                ty,
            })
        }
        other => Err(ExtractError::unrecognized(other.kind())),
    }
}

/// Names of a type-parameter list. Constraints are not supported.
pub fn type_param_names(type_params: &[TypeParameter]) -> Result<Vec<String>> {
    type_params
        .iter()
        .map(|tp| match tp.constraint {
            Some(_) => Err(ExtractError::unsupported("type parameter constraint")),
            None => Ok(tp.name.text.clone()),
        })
        .collect()
}

/// Normalize a parameter list.
pub fn params(params: &[Parameter], scope: &TypeScope<'_>) -> Result<Vec<Param>> {
    params.iter().map(|p| param(p, scope)).collect()
}

fn param(param: &Parameter, scope: &TypeScope<'_>) -> Result<Param> {
    if param.initializer.is_some() {
        return Err(ExtractError::unsupported(format!(
            "default value for parameter `{}`",
            param.name.text
        )));
    }
    let ty = param
        .type_annotation
        .as_ref()
        .map(|ty| normalize(ty, scope))
        .transpose()?;
    Ok(Param {
        name: param.name.text.clone(),
        ty,
        var_args: param.dot_dot_dot,
        optional: param.question,
    })
}
