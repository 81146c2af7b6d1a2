mod value;
pub use value::*;

pub use tarn_location::Location;

use derive_more::Display;

use thin_vec::ThinVec;

use std::rc::Rc;

#[derive(Debug, Clone)]
pub enum Node {
    Stmt(Box<StmtKind>),

    Expr(Box<ExprKind>),
}

impl From<StmtKind> for Node {
    fn from(kind: StmtKind) -> Self {
        Node::Stmt(kind.into())
    }
}

impl From<ExprKind> for Node {
    fn from(kind: ExprKind) -> Self {
        Node::Expr(kind.into())
    }
}

#[derive(Debug, Clone)]
pub enum StmtKind {
    Block(Block),

    Print(Print),

    Conditional(Conditional),

    While(While),

    For(For),

    Assignment(Assignment),

    LocalDeclaration(Variable),

    FunctionDeclaration(Rc<Function>),

    FunctionCall(Call),

    Return(Return),
}

impl StmtKind {
    pub fn location(&self) -> Location {
        match self {
            StmtKind::Block(block) => block.location,
            StmtKind::Print(print) => print.location,
            StmtKind::Conditional(conditional) => conditional.location,
            StmtKind::While(while_loop) => while_loop.location,
            StmtKind::For(for_loop) => for_loop.location,
            StmtKind::Assignment(assignment) => assignment.location,
            StmtKind::LocalDeclaration(variable) => variable.location,
            StmtKind::FunctionDeclaration(function) => function.location,
            StmtKind::FunctionCall(call) => call.location,
            StmtKind::Return(ret) => ret.location,
        }
    }
}

/// An ordered list of statements. Evaluating a block never opens a scope on
/// its own; the construct owning the block does.
#[derive(Debug, Clone, Default)]
pub struct Block {
    pub body: ThinVec<StmtKind>,
    pub location: Location,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    #[display(fmt = "")]
    None,

    #[display(fmt = "\n")]
    Newline,
}

#[derive(Debug, Clone)]
pub struct Print {
    pub value: ExprKind,
    pub line_ending: LineEnding,
    pub location: Location,
}

#[derive(Debug, Clone)]
pub struct Conditional {
    pub condition: ExprKind,
    pub body: Block,
    pub fallback: Option<Block>,
    pub location: Location,
}

#[derive(Debug, Clone)]
pub struct While {
    pub condition: ExprKind,
    pub body: Block,
    pub location: Location,
}

#[derive(Debug, Clone)]
pub struct For {
    pub variable: String,
    pub start: ExprKind,
    pub end: ExprKind,
    pub step: Option<ExprKind>,
    pub body: Block,
    pub location: Location,
}

#[derive(Debug, Clone)]
pub struct Assignment {
    pub name: String,
    pub value: ExprKind,
    pub location: Location,
}

/// `local name [= value]`. Without a value the name is bound but unset.
#[derive(Debug, Clone)]
pub struct Variable {
    pub name: String,
    pub value: Option<ExprKind>,
    pub location: Location,
}

#[derive(Debug, Clone)]
pub struct Function {
    pub name: String,
    pub parameters: ThinVec<FunctionParameter>,
    pub body: Block,
    pub location: Location,
}

#[derive(Debug, Clone)]
pub struct FunctionParameter {
    pub name: String,
    pub location: Location,
}

#[derive(Debug, Clone)]
pub struct Call {
    pub function_name: String,
    pub arguments: ThinVec<ExprKind>,
    pub location: Location,
}

#[derive(Debug, Clone)]
pub struct Return {
    pub value: Option<ExprKind>,
    pub location: Location,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    #[display(fmt = "+")]
    Plus,

    #[display(fmt = "-")]
    Minus,

    #[display(fmt = "not")]
    Not,
}

impl TryFrom<&str> for UnaryOperator {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "+" => Ok(Self::Plus),
            "-" => Ok(Self::Minus),
            "not" => Ok(Self::Not),

            _ => Err(format!("unknown unary operator '{}'", value)),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Arithmetic
    #[display(fmt = "+")]
    Plus,
    #[display(fmt = "-")]
    Minus,
    #[display(fmt = "*")]
    Star,
    #[display(fmt = "/")]
    ForwardSlash,
    #[display(fmt = "%")]
    Percent,
    #[display(fmt = "^")]
    Caret,

    // Comparison
    #[display(fmt = "<")]
    LessThan,
    #[display(fmt = "<=")]
    LessEquals,
    #[display(fmt = ">")]
    GreaterThan,
    #[display(fmt = ">=")]
    GreaterEquals,
    #[display(fmt = "==")]
    Equals,
    #[display(fmt = "!=")]
    NotEquals,
}

impl TryFrom<&str> for BinaryOperator {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "+" => Ok(Self::Plus),
            "-" => Ok(Self::Minus),
            "*" => Ok(Self::Star),
            "/" => Ok(Self::ForwardSlash),
            "%" => Ok(Self::Percent),
            "^" => Ok(Self::Caret),

            "<" => Ok(Self::LessThan),
            "<=" => Ok(Self::LessEquals),
            ">" => Ok(Self::GreaterThan),
            ">=" => Ok(Self::GreaterEquals),
            "==" => Ok(Self::Equals),
            "~=" | "!=" => Ok(Self::NotEquals),

            _ => Err(format!("unknown binary operator '{}'", value)),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    #[display(fmt = "and")]
    And,

    #[display(fmt = "or")]
    Or,
}

impl TryFrom<&str> for LogicalOperator {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "and" => Ok(Self::And),
            "or" => Ok(Self::Or),

            _ => Err(format!("unknown logical operator '{}'", value)),
        }
    }
}

#[derive(Debug, Clone)]
pub enum ExprKind {
    Int {
        value: i64,
        location: Location,
    },

    Float {
        value: f64,
        location: Location,
    },

    Bool {
        value: bool,
        location: Location,
    },

    String {
        value: String,
        location: Location,
    },

    Identifier {
        name: String,
        location: Location,
    },

    Grouping {
        inner: Box<ExprKind>,
        location: Location,
    },

    UnaryOperation {
        operator: UnaryOperator,
        right: Box<ExprKind>,
        location: Location,
    },

    BinaryOperation {
        left: Box<ExprKind>,
        operator: BinaryOperator,
        right: Box<ExprKind>,
        location: Location,
    },

    LogicalOperation {
        left: Box<ExprKind>,
        operator: LogicalOperator,
        right: Box<ExprKind>,
        location: Location,
    },

    Call(Call),
}

impl ExprKind {
    pub fn location(&self) -> Location {
        match self {
            ExprKind::Int { location, .. }
            | ExprKind::Float { location, .. }
            | ExprKind::Bool { location, .. }
            | ExprKind::String { location, .. }
            | ExprKind::Identifier { location, .. }
            | ExprKind::Grouping { location, .. }
            | ExprKind::UnaryOperation { location, .. }
            | ExprKind::BinaryOperation { location, .. }
            | ExprKind::LogicalOperation { location, .. } => *location,

            ExprKind::Call(call) => call.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn operators_round_trip_through_their_lexemes() {
        for lexeme in ["+", "-", "*", "/", "%", "^", "<", "<=", ">", ">=", "==", "!="] {
            let operator = BinaryOperator::try_from(lexeme).unwrap();

            assert_eq!(operator.to_string(), lexeme);
        }

        assert_eq!(BinaryOperator::try_from("~="), Ok(BinaryOperator::NotEquals));
        assert_eq!(UnaryOperator::try_from("not"), Ok(UnaryOperator::Not));
        assert_eq!(LogicalOperator::try_from("or"), Ok(LogicalOperator::Or));
    }

    #[test]
    fn unknown_lexemes_are_rejected() {
        assert!(BinaryOperator::try_from("**").is_err());
        assert!(UnaryOperator::try_from("!").is_err());
        assert!(LogicalOperator::try_from("xor").is_err());
    }

    #[test]
    fn line_endings() {
        assert_eq!(LineEnding::None.to_string(), "");
        assert_eq!(LineEnding::Newline.to_string(), "\n");
    }

    #[test]
    fn locations_are_reported_per_node() {
        let call = ExprKind::Call(Call {
            function_name: "f".to_owned(),
            arguments: ThinVec::new(),
            location: Location::new(7),
        });

        assert_eq!(call.location(), Location::new(7));

        let stmt = StmtKind::Return(Return {
            value: Some(call),
            location: Location::new(8),
        });

        assert_eq!(stmt.location(), Location::new(8));
    }
}
