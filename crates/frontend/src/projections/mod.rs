pub mod p900_payroll;
