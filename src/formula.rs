use crate::model::NetworkParameters;

/// Human-readable form of the network, e.g.
/// `y=tanh(1*(tanh(1x+0))+1*(tanh(1x+0))+0)`.
///
/// Negative terms read `-2`, not `+-2`. That is a single replace pass: other
/// sign sequences such as `-+` are left untouched.
pub fn formula(params: &NetworkParameters) -> String {
    let NetworkParameters { w1, b1, w2, b2, w3, w4, b3 } = *params;
    normalize_signs(&format!(
        "y=tanh({w3}*(tanh({w1}x+{b1}))+{w4}*(tanh({w2}x+{b2}))+{b3})"
    ))
}

fn normalize_signs(raw: &str) -> String {
    raw.replace("+-", "-")
}
