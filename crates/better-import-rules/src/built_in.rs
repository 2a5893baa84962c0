//! Built-in replacement rules embedded in the binary
//!
//! Each entry pairs a package name with a short message pointing at a
//! lighter, maintained, or native alternative. Declaration order is kept by
//! [`RuleTable::iter`](crate::RuleTable::iter).

use crate::ReplacementRule;

const fn rule(name: &'static str, message: &'static str) -> ReplacementRule {
    ReplacementRule { name, message }
}

/// Packages with better alternatives
pub const BETTER_ALTERNATIVES: &[ReplacementRule] = &[
    // HTTP
    rule("axios", "Use https://www.npmjs.com/package/ky instead."),
    rule("request", "Use native fetch or https://www.npmjs.com/package/ky instead."),
    rule("request-promise", "Use native fetch or https://www.npmjs.com/package/ky instead."),
    rule("node-fetch", "Use native fetch instead (Node.js 18+)."),
    rule("cross-fetch", "Use native fetch instead (Node.js 18+)."),
    rule("isomorphic-fetch", "Use native fetch instead (Node.js 18+)."),
    // Utility belts
    rule("lodash", "Use https://es-toolkit.slash.page instead."),
    rule("lodash-es", "Use https://es-toolkit.slash.page instead."),
    rule("underscore", "Use https://es-toolkit.slash.page instead."),
    // Terminal colors
    rule("chalk", "Use https://www.npmjs.com/package/picocolors instead."),
    rule("colors", "Use https://www.npmjs.com/package/picocolors instead."),
    rule("cli-color", "Use https://www.npmjs.com/package/picocolors instead."),
    // Dates
    rule("moment", "Use https://day.js.org or https://date-fns.org instead."),
    // Filesystem
    rule("rimraf", "Use fs.rm(path, { recursive: true, force: true }) instead."),
    rule("mkdirp", "Use fs.mkdir(path, { recursive: true }) instead."),
    rule("fs-extra", "Use node:fs/promises instead."),
    rule("glob", "Use https://www.npmjs.com/package/tinyglobby instead."),
    rule("globby", "Use https://www.npmjs.com/package/tinyglobby instead."),
    rule("fast-glob", "Use https://www.npmjs.com/package/tinyglobby instead."),
    // Process
    rule("execa", "Use https://www.npmjs.com/package/tinyexec instead."),
    // Promises
    rule("bluebird", "Use native Promise instead."),
    rule("es6-promise", "Use native Promise instead."),
    // Built-in replacements
    rule("uuid", "Use crypto.randomUUID() instead."),
    rule("md5", "Use crypto.createHash('md5') instead."),
    rule("querystring", "Use URLSearchParams instead."),
    rule("object-assign", "Use Object.assign instead."),
    rule("array-includes", "Use Array.prototype.includes instead."),
    rule("left-pad", "Use String.prototype.padStart instead."),
    rule("deep-equal", "Use https://www.npmjs.com/package/dequal instead."),
    rule("classnames", "Use https://www.npmjs.com/package/clsx instead."),
    // Deprecated tooling
    rule("node-sass", "Use https://www.npmjs.com/package/sass instead."),
    rule("tslint", "Use https://typescript-eslint.io instead."),
];
