pub mod expense_mapper;

pub use expense_mapper::ExpenseMapper;
