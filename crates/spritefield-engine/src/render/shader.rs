use std::fmt;

/// A WGSL module that failed to compile.
///
/// Carries every error diagnostic the backend reported, formatted as
/// `line:column: message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderCompileError {
    pub label: String,
    pub diagnostics: Vec<String>,
}

impl fmt::Display for ShaderCompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shader `{}` failed to compile", self.label)?;
        for d in &self.diagnostics {
            write!(f, "\n  {d}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ShaderCompileError {}

/// Compiles a WGSL module and checks its compilation log.
///
/// Creation runs inside a validation error scope, so a broken module comes
/// back as an error instead of reaching the device's uncaptured-error handler.
/// Error diagnostics are logged and returned; warnings are logged only.
/// Callers treat a failure as fatal.
pub fn compile_wgsl(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule, ShaderCompileError> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    let captured = pollster::block_on(scope.pop());

    let info = pollster::block_on(module.get_compilation_info());

    let mut diagnostics = Vec::new();
    for msg in &info.messages {
        let text = format_message(msg);
        match msg.message_type {
            wgpu::CompilationMessageType::Error => {
                log::error!("{label}: {text}");
                diagnostics.push(text);
            }
            wgpu::CompilationMessageType::Warning => log::warn!("{label}: {text}"),
            wgpu::CompilationMessageType::Info => log::debug!("{label}: {text}"),
        }
    }

    // The scope also catches failures that leave no positioned message.
    if let Some(err) = captured {
        if diagnostics.is_empty() {
            log::error!("{label}: {err}");
            diagnostics.push(err.to_string());
        }
    }

    if diagnostics.is_empty() {
        Ok(module)
    } else {
        Err(ShaderCompileError { label: label.to_string(), diagnostics })
    }
}

fn format_message(msg: &wgpu::CompilationMessage) -> String {
    match &msg.location {
        Some(loc) => format!("{}:{}: {}", loc.line_number, loc.line_position, msg.message),
        None => msg.message.clone(),
    }
}
