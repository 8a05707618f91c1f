//! Go statement corpus.

#[cfg(test)]
mod tests {
  use crate::__tests__::helpers::{assert_compound, assert_statements};

  #[test]
  fn test_top_level_declarations() {
    assert_statements("go", "▶️package main◀️");
    assert_statements(
      "go",
      "
      ▶️package main◀️

      ▶️import \"fmt\"◀️

      ▶️const (
          zero = 0
          one = 1
      )◀️

      ▶️var counter = 0◀️

      ▶️type a b◀️
      ",
    );
  }

  #[test]
  fn test_functions_and_methods() {
    assert_statements(
      "go",
      "
      ▶️package main◀️

      /*
       * Comment
       */
      ▶️func example() ▶️{}◀️◀️

      ▶️func (self Document) GetLine(n int) ▶️{
          // comment
      }◀️◀️
      ",
    );
  }

  #[test]
  fn test_simple_statements() {
    assert_statements(
      "go",
      "
      ▶️package main◀️

      ▶️func main() ▶️{
          ▶️x := 1◀️
          ▶️go f()◀️
          ▶️defer f()◀️
          ▶️return◀️
      }◀️◀️
      ",
    );
  }

  #[test]
  fn test_if_initializer_is_not_a_statement() {
    assert_statements(
      "go",
      "
      ▶️package main◀️

      ▶️func main() ▶️{
          ▶️if b := a(); b < 0 ▶️{
              ▶️b *= -1◀️
          }◀️◀️
      }◀️◀️
      ",
    );
  }

  #[test]
  fn test_if_else() {
    assert_statements(
      "go",
      "
      ▶️package main◀️

      ▶️func main() ▶️{
          ▶️if a ▶️{
              ▶️b()◀️
          }◀️ else ▶️{
              ▶️c()◀️
          }◀️◀️
      }◀️◀️
      ",
    );
  }

  #[test]
  fn test_for_clauses_are_not_statements() {
    assert_statements(
      "go",
      "
      ▶️package main◀️

      ▶️func main() ▶️{
          ▶️for ▶️{
              ▶️a()◀️
          }◀️◀️
          ▶️for i := 0; i < 10; i++ ▶️{
              ▶️if i == 0 ▶️{
                  ▶️continue◀️
              }◀️◀️
              ▶️f(i)◀️
          }◀️◀️
      }◀️◀️
      ",
    );
  }

  #[test]
  fn test_switches() {
    assert_statements(
      "go",
      "
      ▶️package main◀️

      ▶️func main() ▶️{
          ▶️switch a {
              case 1:
                  ▶️b◀️
              case 2:
                  ▶️fallthrough◀️
              default:
                  ▶️d◀️
          }◀️
      }◀️◀️
      ",
    );
    assert_statements(
      "go",
      "
      ▶️package main◀️

      ▶️func debug(i interface{}) ▶️{
          ▶️switch v := i.(type) {
              case int:
                  ▶️fmt.Printf(\"%v is an integer\", v)◀️
              default:
                  ▶️fmt.Printf(\"%T is unknown\", v)◀️
          }◀️
      }◀️◀️
      ",
    );
  }

  #[test]
  fn test_select() {
    assert_statements(
      "go",
      "
      ▶️package main◀️

      ▶️func demux(a chan string, b chan string) ▶️{
          ▶️select {
              case msg := <-a:
                  ▶️dispatch(msg)◀️
              case msg := <-b:
                  ▶️dispatch(msg)◀️
          }◀️
      }◀️◀️
      ",
    );
  }

  #[test]
  fn test_labels_and_goto() {
    assert_statements(
      "go",
      "
      ▶️package main◀️

      ▶️func main() ▶️{
          ▶️goto end◀️
      ▶️end:
          ▶️return◀️◀️
      }◀️◀️
      ",
    );
  }

  #[test]
  fn test_nested_blocks() {
    assert_statements(
      "go",
      "
      ▶️package main◀️

      ▶️func main() ▶️{
          ▶️{
              ▶️a()◀️
          }◀️
      }◀️◀️
      ",
    );
  }

  #[test]
  fn test_compound_flags() {
    assert_compound("go", "package main\n\nfunc main() {\n\t❚x := 1\n}", false);
    assert_compound("go", "package main\n\n❚func main() {}", true);
    assert_compound("go", "package main\n\n❚func (self Document) GetLine (n int) {}", true);
    assert_compound("go", "package main\n\nfunc main() {\n\t❚if a {\n\t\tb\n\t}\n}", true);
    assert_compound("go", "package main\n\nfunc main() {\n\t❚for i := 0; i < 10; i++ {\n\t\ta()\n\t}\n}", true);
    assert_compound("go", "package main\n\nfunc main() {\n\t❚switch a {\n\tcase 1:\n\t\tb\n\t}\n}", true);
    assert_compound("go", "package main\n\nfunc main() {\n\t❚select {\n\tcase msg := <-a:\n\t\tf(msg)\n\t}\n}", true);
  }
}
