//! Reference snippets, one per dialect.
//!
//! Each sample is valid under its own dialect and is used to demonstrate
//! and test the full ingest pipeline.

use crate::dialect::Dialect;

/// A named example snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub filename: &'static str,
    pub dialect: Dialect,
    pub text: &'static str,
}

/// Plain script with module exports
pub const PLAIN_SCRIPT: Sample = Sample {
    filename: "test.js",
    dialect: Dialect::PlainScript,
    text: r#"// Example JavaScript file for testing the parser
function greet(name) {
    return `Hello, ${name}!`;
}

const message = greet("World");
console.log(message);

// Example with modules
export default greet;
export { message };
"#,
};

/// Typed example with an interface, generics and async code
pub const TYPED_EXAMPLE: Sample = Sample {
    filename: "typescript-example.ts",
    dialect: Dialect::TypedSuperset,
    text: r#"interface User {
    id: number;
    name: string;
    email: string;
}

function fetchUsers(): Promise<User[]> {
    return fetch('/api/users')
        .then(response => response.json())
        .then(data => data as User[]);
}

async function displayUsers() {
    try {
        const users = await fetchUsers();
        users.forEach(user => {
            console.log(`${user.name} - ${user.email}`);
        });
    } catch (error) {
        console.error('Failed to fetch users:', error);
    }
}

displayUsers();
"#,
};

/// Component with embedded markup
pub const COMPONENT: Sample = Sample {
    filename: "react-component.tsx",
    dialect: Dialect::MarkupEmbedded,
    text: r#"import React from 'react';

interface Props {
    name: string;
    age?: number;
}

const UserCard: React.FC<Props> = ({ name, age }) => {
    return (
        <div className="user-card">
            <h2>{name}</h2>
            {age && <p>Age: {age}</p>}
            <button onClick={() => alert(`Hello, ${name}!`)}>
                Greet
            </button>
        </div>
    );
};

export default UserCard;
"#,
};

/// Every sample, in dialect order
pub const ALL: [Sample; 3] = [PLAIN_SCRIPT, TYPED_EXAMPLE, COMPONENT];
