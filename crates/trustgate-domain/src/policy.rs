use crate::model::Manifest;
use crate::policies;
use trustgate_types::{Framework, Severity};

/// Pure predicate: `true` means the manifest satisfies the policy.
pub type CheckFn = fn(&Manifest) -> bool;

/// Pure transform: consumes the previous working copy and returns the corrected one.
pub type CorrectFn = fn(Manifest) -> Manifest;

/// One compliance rule: plain metadata plus a (predicate, correction) pair.
#[derive(Clone, Copy, Debug)]
pub struct Policy {
    pub id: &'static str,
    pub name: &'static str,
    pub framework: Framework,
    pub severity: Severity,
    pub description: &'static str,
    pub correction_description: &'static str,
    pub check: CheckFn,
    pub correct: CorrectFn,
}

impl Policy {
    pub fn passes(&self, manifest: &Manifest) -> bool {
        (self.check)(manifest)
    }

    pub fn apply(&self, manifest: Manifest) -> Manifest {
        (self.correct)(manifest)
    }
}

/// Immutable table of policies, fixed at build time.
///
/// Declaration order is significant: it is the order violations are reported and corrections
/// are applied.
#[derive(Debug)]
pub struct PolicyRegistry {
    policies: &'static [Policy],
}

static BUILTIN: PolicyRegistry = PolicyRegistry {
    policies: &policies::ALL,
};

impl PolicyRegistry {
    /// The process-wide built-in registry.
    pub fn builtin() -> &'static PolicyRegistry {
        &BUILTIN
    }

    pub fn list_all(&self) -> &'static [Policy] {
        self.policies
    }

    pub fn get(&self, policy_id: &str) -> Option<&'static Policy> {
        self.policies.iter().find(|p| p.id == policy_id)
    }

    /// Framework selector: policies whose framework was requested, plus baseline unconditionally.
    ///
    /// Returned in declaration order, filtered but never re-sorted.
    pub fn select(&self, frameworks: &[Framework]) -> Vec<&'static Policy> {
        self.policies
            .iter()
            .filter(|p| p.framework == Framework::Baseline || frameworks.contains(&p.framework))
            .collect()
    }
}

/// Select built-in policies for raw framework identifiers. Unknown identifiers are ignored.
pub fn get_policies_for_frameworks<S: AsRef<str>>(requested: &[S]) -> Vec<&'static Policy> {
    let frameworks = resolve_frameworks(requested);
    PolicyRegistry::builtin().select(&frameworks)
}

/// Keep only recognized framework identifiers, in request order, without duplicates.
pub fn resolve_frameworks<S: AsRef<str>>(requested: &[S]) -> Vec<Framework> {
    let mut out: Vec<Framework> = Vec::new();
    for raw in requested {
        if let Some(fw) = Framework::parse(raw.as_ref())
            && !out.contains(&fw)
        {
            out.push(fw);
        }
    }
    out
}
