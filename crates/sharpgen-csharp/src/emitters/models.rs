use minijinja::context;
use sharpgen_core::GeneratedFile;
use sharpgen_core::ir::{Model, Property, Spec};

use crate::GeneratorError;
use crate::generator::Layout;
use crate::type_mapper::cs_type;

/// Emit one `Models/<Name>.cs` file per model and per enum.
pub fn emit_models(spec: &Spec, layout: &Layout) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let env = super::template_env();
    let mut files = Vec::new();

    let model_tmpl = env.get_template("model.cs.j2")?;
    for model in &spec.models {
        let content = model_tmpl.render(context! {
            namespace => layout.namespace.clone(),
            name => model.name.clone(),
            description => model.description.clone(),
            base_clause => base_clause(model),
            polymorphism => model.polymorphism.as_ref().map(|poly| context! {
                discriminator => poly.discriminator.clone(),
                derived => poly
                    .derived
                    .iter()
                    .map(|d| context! { value => d.value.clone(), model => d.model.clone() })
                    .collect::<Vec<_>>(),
            }),
            properties => model.properties.iter().map(property_ctx).collect::<Vec<_>>(),
        })?;
        files.push(GeneratedFile {
            path: layout.src(&format!("Models/{}.cs", model.name)),
            content,
        });
    }

    let enum_tmpl = env.get_template("enum.cs.j2")?;
    for item in &spec.enums {
        let content = enum_tmpl.render(context! {
            namespace => layout.namespace.clone(),
            name => item.name.clone(),
            description => item.description.clone(),
            values => item
                .values
                .iter()
                .map(|v| context! { name => v.name.clone(), wire_value => v.wire_value.clone() })
                .collect::<Vec<_>>(),
        })?;
        files.push(GeneratedFile {
            path: layout.src(&format!("Models/{}.cs", item.name)),
            content,
        });
    }

    Ok(files)
}

fn base_clause(model: &Model) -> String {
    match &model.parent {
        Some(parent) => format!(" : {parent}"),
        None => String::new(),
    }
}

fn property_ctx(property: &Property) -> minijinja::Value {
    context! {
        name => property.name.clone(),
        cs_type => cs_type(&property.ty),
        description => property.description.clone(),
        example => property.example.clone(),
        attributes => property_attributes(property),
    }
}

/// Validation and serialization attributes, one per line above the property.
fn property_attributes(property: &Property) -> Vec<String> {
    let mut attributes = Vec::new();

    if property.required {
        attributes.push("Required".to_string());
    }
    if property.min_length.is_some() || property.max_length.is_some() {
        let max = property
            .max_length
            .map_or("int.MaxValue".to_string(), |v| v.to_string());
        let mut attr = format!("StringLength({max}");
        if let Some(min) = property.min_length {
            attr.push_str(&format!(", MinimumLength = {min}"));
        }
        attr.push(')');
        attributes.push(attr);
    }
    if let Some(pattern) = &property.pattern {
        attributes.push(format!(
            "RegularExpression(@\"{}\")",
            pattern.replace('"', "\"\"")
        ));
    }
    if property.minimum.is_some() || property.maximum.is_some() {
        let minimum = property.minimum.map_or("double.MinValue".to_string(), cs_double);
        let maximum = property.maximum.map_or("double.MaxValue".to_string(), cs_double);
        attributes.push(format!("Range({minimum}, {maximum})"));
    }
    attributes.push(format!("JsonPropertyName(\"{}\")", property.wire_name));

    attributes
}

fn cs_double(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
