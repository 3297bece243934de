use crate::parsing::CommentBlock;

/// What a declaration declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclKind {
    Type,
    Func {
        /// Result types as written, e.g. `["*Client", "error"]`.
        results: Vec<String>,
    },
    Method {
        receiver: String,
        pointer: bool,
    },
    Value {
        /// Declared type, if any.
        type_name: Option<String>,
        constant: bool,
    },
}

/// One documented declaration.
#[derive(Debug, Clone)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclKind,
    pub comment: CommentBlock,
}

impl Declaration {
    pub fn type_decl(name: impl Into<String>, comment: CommentBlock) -> Self {
        Self {
            name: name.into(),
            kind: DeclKind::Type,
            comment,
        }
    }

    pub fn func<I, S>(name: impl Into<String>, results: I, comment: CommentBlock) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            kind: DeclKind::Func {
                results: results.into_iter().map(Into::into).collect(),
            },
            comment,
        }
    }

    /// A method; a receiver written `*T` is a pointer receiver on `T`.
    pub fn method(receiver: &str, name: impl Into<String>, comment: CommentBlock) -> Self {
        let (receiver, pointer) = match receiver.strip_prefix('*') {
            Some(r) => (r, true),
            None => (receiver, false),
        };
        Self {
            name: name.into(),
            kind: DeclKind::Method {
                receiver: receiver.to_string(),
                pointer,
            },
            comment,
        }
    }

    pub fn constant(name: impl Into<String>, type_name: Option<&str>, comment: CommentBlock) -> Self {
        Self::value(name, type_name, true, comment)
    }

    pub fn variable(name: impl Into<String>, type_name: Option<&str>, comment: CommentBlock) -> Self {
        Self::value(name, type_name, false, comment)
    }

    fn value(
        name: impl Into<String>,
        type_name: Option<&str>,
        constant: bool,
        comment: CommentBlock,
    ) -> Self {
        Self {
            name: name.into(),
            kind: DeclKind::Value {
                type_name: type_name.map(str::to_string),
                constant,
            },
            comment,
        }
    }

    /// Package-unique identifier: `Name`, or `Recv.Name` for methods.
    pub fn id(&self) -> String {
        match &self.kind {
            DeclKind::Method { receiver, .. } => format!("{receiver}.{}", self.name),
            _ => self.name.clone(),
        }
    }
}
